use crate::model::{
    hotel::{Hotel, HotelWithRooms},
    id::{HotelId, RoomId},
    room::RoomOccupancy,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Hotel>>;
    async fn find_with_rooms(&self, hotel_id: HotelId) -> AppResult<Option<HotelWithRooms>>;
    // Capacity plus the live count of active bookings for the room.
    async fn find_room_occupancy(&self, room_id: RoomId) -> AppResult<Option<RoomOccupancy>>;
}
