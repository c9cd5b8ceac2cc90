use chrono::{DateTime, Utc};
use kernel::model::{
    booking::Booking,
    id::{BookingId, HotelId, RoomId, UserId},
    room::Room,
};

// An active booking joined with its room.
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub room_id: RoomId,
    pub room_name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub room_created_at: DateTime<Utc>,
    pub room_updated_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            booking_id,
            user_id,
            room_id,
            room_name,
            capacity,
            hotel_id,
            room_created_at,
            room_updated_at,
        } = value;
        Booking {
            booking_id,
            user_id,
            room: Room {
                room_id,
                room_name,
                capacity,
                hotel_id,
                created_at: room_created_at,
                updated_at: room_updated_at,
            },
        }
    }
}
