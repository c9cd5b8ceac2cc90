use std::sync::Arc;

use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::model::{
    hotel::{Hotel, HotelWithRooms},
    id::{HotelId, UserId},
    ticket::TicketStatus,
};
use crate::repository::{
    enrollment::EnrollmentRepository, hotel::HotelRepository, ticket::TicketRepository,
};

// Hotel browsing for entitled attendees. This path keeps its own gate
// order and failure kinds: a missing enrollment or ticket reads as
// NotFound, an unpaid or non-hotel ticket as PaymentRequired.
#[derive(new)]
pub struct HotelService {
    hotel_repository: Arc<dyn HotelRepository>,
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    ticket_repository: Arc<dyn TicketRepository>,
}

impl HotelService {
    pub async fn list(&self, user_id: UserId) -> AppResult<Vec<Hotel>> {
        let hotels = self.hotel_repository.find_all().await?;
        if hotels.is_empty() {
            return Err(AppError::EntityNotFound("no hotels found".into()));
        }

        self.check_hotel_access(user_id).await?;

        Ok(hotels)
    }

    pub async fn find_with_rooms(
        &self,
        user_id: UserId,
        hotel_id: HotelId,
    ) -> AppResult<HotelWithRooms> {
        let hotel = self
            .hotel_repository
            .find_with_rooms(hotel_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("hotel ({hotel_id}) was not found")))?;

        self.check_hotel_access(user_id).await?;

        Ok(hotel)
    }

    async fn check_hotel_access(&self, user_id: UserId) -> AppResult<()> {
        let enrollment = self
            .enrollment_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("enrollment not found".into()))?;

        let ticket = self
            .ticket_repository
            .find_by_enrollment_id(enrollment.enrollment_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("ticket not found".into()))?;

        if ticket.status != TicketStatus::Paid {
            return Err(AppError::PaymentRequiredError("ticket is not paid".into()));
        }
        if !ticket.ticket_type.includes_hotel {
            return Err(AppError::PaymentRequiredError(
                "ticket does not include hotel".into(),
            ));
        }
        if ticket.ticket_type.is_remote {
            return Err(AppError::PaymentRequiredError("ticket is remote".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ticket::Ticket;
    use crate::service::support::{
        enrollment, hotel, paid_hotel_ticket, room, InMemoryEnrollmentRepository,
        InMemoryHotelRepository, InMemoryTicketRepository,
    };

    const USER_ID: i64 = 1;
    const ENROLLMENT_ID: i64 = 10;

    fn service(
        hotels: Vec<Hotel>,
        enrollments: Vec<crate::model::enrollment::Enrollment>,
        tickets: Vec<Ticket>,
    ) -> HotelService {
        HotelService::new(
            Arc::new(InMemoryHotelRepository::new(hotels, vec![room(1, 5)])),
            Arc::new(InMemoryEnrollmentRepository::new(enrollments)),
            Arc::new(InMemoryTicketRepository::new(tickets)),
        )
    }

    #[tokio::test]
    async fn list_fails_when_there_are_no_hotels() {
        let service = service(
            vec![],
            vec![enrollment(ENROLLMENT_ID, USER_ID)],
            vec![paid_hotel_ticket(ENROLLMENT_ID)],
        );

        let res = service.list(UserId::new(USER_ID)).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn list_fails_as_not_found_without_enrollment() {
        let service = service(vec![hotel(1)], vec![], vec![paid_hotel_ticket(ENROLLMENT_ID)]);

        let res = service.list(UserId::new(USER_ID)).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn list_fails_as_payment_required_for_unpaid_ticket() {
        let mut ticket = paid_hotel_ticket(ENROLLMENT_ID);
        ticket.status = TicketStatus::Reserved;
        let service = service(
            vec![hotel(1)],
            vec![enrollment(ENROLLMENT_ID, USER_ID)],
            vec![ticket],
        );

        let res = service.list(UserId::new(USER_ID)).await;
        assert!(matches!(res, Err(AppError::PaymentRequiredError(_))));
    }

    #[tokio::test]
    async fn list_fails_as_payment_required_for_remote_ticket() {
        let mut ticket = paid_hotel_ticket(ENROLLMENT_ID);
        ticket.ticket_type.is_remote = true;
        let service = service(
            vec![hotel(1)],
            vec![enrollment(ENROLLMENT_ID, USER_ID)],
            vec![ticket],
        );

        let res = service.list(UserId::new(USER_ID)).await;
        assert!(matches!(res, Err(AppError::PaymentRequiredError(_))));
    }

    #[tokio::test]
    async fn list_returns_hotels_for_entitled_user() {
        let service = service(
            vec![hotel(1), hotel(2)],
            vec![enrollment(ENROLLMENT_ID, USER_ID)],
            vec![paid_hotel_ticket(ENROLLMENT_ID)],
        );

        let hotels = service.list(UserId::new(USER_ID)).await.unwrap();
        assert_eq!(hotels.len(), 2);
    }

    #[tokio::test]
    async fn find_with_rooms_fails_when_hotel_does_not_exist() {
        let service = service(
            vec![hotel(1)],
            vec![enrollment(ENROLLMENT_ID, USER_ID)],
            vec![paid_hotel_ticket(ENROLLMENT_ID)],
        );

        let res = service
            .find_with_rooms(UserId::new(USER_ID), HotelId::new(999))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn find_with_rooms_returns_hotel_and_its_rooms() {
        let service = service(
            vec![hotel(1)],
            vec![enrollment(ENROLLMENT_ID, USER_ID)],
            vec![paid_hotel_ticket(ENROLLMENT_ID)],
        );

        let found = service
            .find_with_rooms(UserId::new(USER_ID), HotelId::new(1))
            .await
            .unwrap();
        assert_eq!(found.hotel.hotel_id, HotelId::new(1));
        assert_eq!(found.rooms.len(), 1);
    }
}
