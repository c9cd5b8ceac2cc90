use crate::model::{id::HotelId, room::Room};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub hotel_id: HotelId,
    pub hotel_name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}
