// In-memory implementations of the repository traits, used as storage
// doubles by the service tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use shared::error::{AppError, AppResult};

use crate::model::{
    booking::{
        event::{CreateBooking, ReassignBookingRoom},
        Booking,
    },
    enrollment::Enrollment,
    hotel::{Hotel, HotelWithRooms},
    id::{BookingId, EnrollmentId, HotelId, RoomId, TicketId, TicketTypeId, UserId},
    room::{Room, RoomOccupancy},
    ticket::{Ticket, TicketStatus, TicketType},
};
use crate::repository::{
    booking::BookingRepository, enrollment::EnrollmentRepository, hotel::HotelRepository,
    ticket::TicketRepository,
};

pub(crate) fn enrollment(enrollment_id: i64, user_id: i64) -> Enrollment {
    Enrollment {
        enrollment_id: EnrollmentId::new(enrollment_id),
        user_id: UserId::new(user_id),
    }
}

pub(crate) fn paid_hotel_ticket(enrollment_id: i64) -> Ticket {
    Ticket {
        ticket_id: TicketId::new(100),
        enrollment_id: EnrollmentId::new(enrollment_id),
        status: TicketStatus::Paid,
        ticket_type: TicketType {
            ticket_type_id: TicketTypeId::new(7),
            ticket_type_name: "presential with hotel".into(),
            price: 600,
            is_remote: false,
            includes_hotel: true,
        },
    }
}

pub(crate) fn hotel(hotel_id: i64) -> Hotel {
    let t = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
    Hotel {
        hotel_id: HotelId::new(hotel_id),
        hotel_name: format!("hotel-{hotel_id}"),
        image: "https://example.com/hotel.png".into(),
        created_at: t,
        updated_at: t,
    }
}

pub(crate) fn room(room_id: i64, capacity: i32) -> Room {
    let t = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
    Room {
        room_id: RoomId::new(room_id),
        room_name: format!("room-{room_id}"),
        capacity,
        hotel_id: HotelId::new(1),
        created_at: t,
        updated_at: t,
    }
}

pub(crate) struct InMemoryEnrollmentRepository {
    enrollments: Vec<Enrollment>,
}

impl InMemoryEnrollmentRepository {
    pub(crate) fn new(enrollments: Vec<Enrollment>) -> Self {
        Self { enrollments }
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollmentRepository {
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Enrollment>> {
        Ok(self
            .enrollments
            .iter()
            .find(|e| e.user_id == user_id)
            .cloned())
    }
}

pub(crate) struct InMemoryTicketRepository {
    tickets: Vec<Ticket>,
}

impl InMemoryTicketRepository {
    pub(crate) fn new(tickets: Vec<Ticket>) -> Self {
        Self { tickets }
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: EnrollmentId,
    ) -> AppResult<Option<Ticket>> {
        Ok(self
            .tickets
            .iter()
            .find(|t| t.enrollment_id == enrollment_id)
            .cloned())
    }
}

pub(crate) struct InMemoryHotelRepository {
    hotels: Vec<Hotel>,
    rooms: Vec<Room>,
    booked: HashMap<RoomId, i64>,
}

impl InMemoryHotelRepository {
    pub(crate) fn new(hotels: Vec<Hotel>, rooms: Vec<Room>) -> Self {
        Self {
            hotels,
            rooms,
            booked: HashMap::new(),
        }
    }

    pub(crate) fn with_booked(mut self, room_id: RoomId, current_count: i64) -> Self {
        self.booked.insert(room_id, current_count);
        self
    }
}

#[async_trait]
impl HotelRepository for InMemoryHotelRepository {
    async fn find_all(&self) -> AppResult<Vec<Hotel>> {
        Ok(self.hotels.clone())
    }

    async fn find_with_rooms(&self, hotel_id: HotelId) -> AppResult<Option<HotelWithRooms>> {
        Ok(self
            .hotels
            .iter()
            .find(|h| h.hotel_id == hotel_id)
            .cloned()
            .map(|hotel| HotelWithRooms {
                rooms: self
                    .rooms
                    .iter()
                    .filter(|r| r.hotel_id == hotel.hotel_id)
                    .cloned()
                    .collect(),
                hotel,
            }))
    }

    async fn find_room_occupancy(&self, room_id: RoomId) -> AppResult<Option<RoomOccupancy>> {
        Ok(self
            .rooms
            .iter()
            .find(|r| r.room_id == room_id)
            .map(|r| RoomOccupancy {
                capacity: r.capacity,
                current_count: self.booked.get(&room_id).copied().unwrap_or(0),
            }))
    }
}

struct BookingState {
    next_id: i64,
    active: HashMap<UserId, (BookingId, RoomId)>,
}

pub(crate) struct InMemoryBookingRepository {
    rooms: Vec<Room>,
    state: Mutex<BookingState>,
}

impl InMemoryBookingRepository {
    pub(crate) fn new(rooms: Vec<Room>) -> Self {
        Self {
            rooms,
            state: Mutex::new(BookingState {
                next_id: 1,
                active: HashMap::new(),
            }),
        }
    }

    pub(crate) fn with_booking(
        rooms: Vec<Room>,
        booking_id: i64,
        user_id: i64,
        room_id: i64,
    ) -> Self {
        let mut active = HashMap::new();
        active.insert(
            UserId::new(user_id),
            (BookingId::new(booking_id), RoomId::new(room_id)),
        );
        Self {
            rooms,
            state: Mutex::new(BookingState {
                next_id: booking_id + 1,
                active,
            }),
        }
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut state = self.state.lock().unwrap();
        let booking_id = BookingId::new(state.next_id);
        state.next_id += 1;
        state.active.insert(event.user_id, (booking_id, event.room_id));
        Ok(booking_id)
    }

    async fn reassign_room(&self, event: ReassignBookingRoom) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        let stored = state
            .active
            .values_mut()
            .find(|(booking_id, _)| *booking_id == event.booking_id)
            .ok_or_else(|| {
                AppError::NoRowsAffectedError("no booking record has been updated".into())
            })?;
        stored.1 = event.room_id;
        Ok(())
    }

    async fn find_active_by_user_id(&self, user_id: UserId) -> AppResult<Option<Booking>> {
        let state = self.state.lock().unwrap();
        Ok(state.active.get(&user_id).map(|(booking_id, room_id)| {
            let room = self
                .rooms
                .iter()
                .find(|r| r.room_id == *room_id)
                .cloned()
                .expect("booked room must be seeded in the double");
            Booking {
                booking_id: *booking_id,
                user_id,
                room,
            }
        }))
    }
}
