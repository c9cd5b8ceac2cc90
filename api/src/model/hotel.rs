use chrono::{DateTime, Utc};
use kernel::model::{
    hotel::{Hotel, HotelWithRooms},
    id::{HotelId, RoomId},
    room::Room,
};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelsResponse {
    pub items: Vec<HotelResponse>,
}

impl From<Vec<Hotel>> for HotelsResponse {
    fn from(value: Vec<Hotel>) -> Self {
        Self {
            items: value.into_iter().map(HotelResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    pub id: HotelId,
    pub hotel_name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Hotel> for HotelResponse {
    fn from(value: Hotel) -> Self {
        let Hotel {
            hotel_id,
            hotel_name,
            image,
            created_at,
            updated_at,
        } = value;
        Self {
            id: hotel_id,
            hotel_name,
            image,
            created_at,
            updated_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelWithRoomsResponse {
    pub id: HotelId,
    pub hotel_name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub rooms: Vec<RoomResponse>,
}

impl From<HotelWithRooms> for HotelWithRoomsResponse {
    fn from(value: HotelWithRooms) -> Self {
        let HotelWithRooms { hotel, rooms } = value;
        let Hotel {
            hotel_id,
            hotel_name,
            image,
            created_at,
            updated_at,
        } = hotel;
        Self {
            id: hotel_id,
            hotel_name,
            image,
            created_at,
            updated_at,
            rooms: rooms.into_iter().map(RoomResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: RoomId,
    pub room_name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            room_id,
            room_name,
            capacity,
            hotel_id,
            created_at,
            updated_at,
        } = value;
        Self {
            id: room_id,
            room_name,
            capacity,
            hotel_id,
            created_at,
            updated_at,
        }
    }
}
