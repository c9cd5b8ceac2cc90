use garde::Validate;
use kernel::model::{booking::Booking, id::BookingId};
use serde::{Deserialize, Serialize};

use crate::model::hotel::RoomResponse;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(range(min = 1))]
    pub room_id: i64,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    #[garde(range(min = 1))]
    pub room_id: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingIdResponse {
    pub booking_id: BookingId,
}

impl From<BookingId> for BookingIdResponse {
    fn from(value: BookingId) -> Self {
        Self { booking_id: value }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: BookingId,
    pub room: RoomResponse,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            user_id: _,
            room,
        } = value;
        Self {
            id: booking_id,
            room: room.into(),
        }
    }
}
