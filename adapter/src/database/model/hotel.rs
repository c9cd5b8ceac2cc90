use chrono::{DateTime, Utc};
use kernel::model::{
    hotel::Hotel,
    id::{HotelId, RoomId},
    room::{Room, RoomOccupancy},
};

#[derive(sqlx::FromRow)]
pub struct HotelRow {
    pub hotel_id: HotelId,
    pub hotel_name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<HotelRow> for Hotel {
    fn from(value: HotelRow) -> Self {
        let HotelRow {
            hotel_id,
            hotel_name,
            image,
            created_at,
            updated_at,
        } = value;
        Hotel {
            hotel_id,
            hotel_name,
            image,
            created_at,
            updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct RoomRow {
    pub room_id: RoomId,
    pub room_name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            room_id,
            room_name,
            capacity,
            hotel_id,
            created_at,
            updated_at,
        } = value;
        Room {
            room_id,
            room_name,
            capacity,
            hotel_id,
            created_at,
            updated_at,
        }
    }
}

// Capacity together with the live count of active bookings; the count
// comes from an aggregate over booking rows, never from a cached column.
#[derive(sqlx::FromRow)]
pub struct RoomOccupancyRow {
    pub capacity: i32,
    pub current_count: i64,
}

impl From<RoomOccupancyRow> for RoomOccupancy {
    fn from(value: RoomOccupancyRow) -> Self {
        let RoomOccupancyRow {
            capacity,
            current_count,
        } = value;
        RoomOccupancy {
            capacity,
            current_count,
        }
    }
}
