use std::sync::Arc;

use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::model::{
    booking::{
        event::{CreateBooking, ReassignBookingRoom},
        Booking,
    },
    id::{BookingId, RoomId, UserId},
};
use crate::repository::booking::BookingRepository;
use crate::service::{capacity::RoomCapacityChecker, entitlement::EntitlementResolver};

// Orchestrates room assignment. For a new booking the gates run as
// entitlement -> capacity -> one-booking-per-user, then the single
// write; the first failing gate wins and the rest are skipped. The
// gate order is a behavioral contract, not an implementation detail.
#[derive(new)]
pub struct BookingService {
    entitlement: EntitlementResolver,
    capacity: RoomCapacityChecker,
    booking_repository: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Booking> {
        self.booking_repository
            .find_active_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("booking not found".into()))
    }

    pub async fn create(&self, user_id: UserId, room_id: RoomId) -> AppResult<BookingId> {
        self.entitlement.resolve(user_id).await?;

        let occupancy = self.capacity.check(room_id).await?;
        if occupancy.is_full() {
            return Err(AppError::ForbiddenOperation("room is full".into()));
        }

        if self
            .booking_repository
            .find_active_by_user_id(user_id)
            .await?
            .is_some()
        {
            return Err(AppError::ForbiddenOperation(
                "user already has a booking".into(),
            ));
        }

        self.booking_repository
            .create(CreateBooking::new(user_id, room_id))
            .await
    }

    // Entitlement is not re-checked here; it was established when the
    // original booking was created. Only ownership and the target
    // room's capacity gate a room change.
    pub async fn change_room(
        &self,
        user_id: UserId,
        booking_id: BookingId,
        new_room_id: RoomId,
    ) -> AppResult<BookingId> {
        let booking = self
            .booking_repository
            .find_active_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::ForbiddenOperation("user does not have a booking".into()))?;
        // The path parameter may name any booking; only the caller's own
        // active booking can be moved.
        if booking.booking_id != booking_id {
            return Err(AppError::ForbiddenOperation(
                "booking id does not match".into(),
            ));
        }

        let occupancy = self.capacity.check(new_room_id).await?;
        if occupancy.is_full() {
            return Err(AppError::ForbiddenOperation("room is full".into()));
        }

        self.booking_repository
            .reassign_room(ReassignBookingRoom::new(booking_id, new_room_id))
            .await?;

        Ok(booking_id)
    }
}
