use crate::model::id::{HotelId, RoomId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub room_id: RoomId,
    pub room_name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Live occupancy snapshot for one room. `current_count` is derived from
// active booking rows at decision time, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomOccupancy {
    pub capacity: i32,
    pub current_count: i64,
}

impl RoomOccupancy {
    // `>=` rather than `==`: a count that overshoots capacity through a
    // write race must still report the room as full.
    pub fn is_full(&self) -> bool {
        self.current_count >= i64::from(self.capacity)
    }
}
