use crate::model::{
    id::{BookingId, UserId},
    room::Room,
};

pub mod event;

// Links one user to one room. At most one active booking exists per user.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub room: Room,
}
