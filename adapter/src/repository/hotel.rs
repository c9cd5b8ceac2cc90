use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    hotel::{Hotel, HotelWithRooms},
    id::{HotelId, RoomId},
    room::{Room, RoomOccupancy},
};
use kernel::repository::hotel::HotelRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::hotel::{HotelRow, RoomOccupancyRow, RoomRow},
    ConnectionPool,
};

#[derive(new)]
pub struct HotelRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl HotelRepository for HotelRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Hotel>> {
        let rows: Vec<HotelRow> = sqlx::query_as(
            r#"
                SELECT
                    hotel_id,
                    hotel_name,
                    image,
                    created_at,
                    updated_at
                FROM hotels
                ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn find_with_rooms(&self, hotel_id: HotelId) -> AppResult<Option<HotelWithRooms>> {
        let hotel: Option<HotelRow> = sqlx::query_as(
            r#"
                SELECT
                    hotel_id,
                    hotel_name,
                    image,
                    created_at,
                    updated_at
                FROM hotels
                WHERE hotel_id = $1
            "#,
        )
        .bind(hotel_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(hotel) = hotel else {
            return Ok(None);
        };

        let rooms: Vec<RoomRow> = sqlx::query_as(
            r#"
                SELECT
                    room_id,
                    room_name,
                    capacity,
                    hotel_id,
                    created_at,
                    updated_at
                FROM rooms
                WHERE hotel_id = $1
                ORDER BY room_id ASC
            "#,
        )
        .bind(hotel_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(Some(HotelWithRooms {
            hotel: hotel.into(),
            rooms: rooms.into_iter().map(Room::from).collect(),
        }))
    }

    // 部屋の定員と現在の予約数を一緒に取得する
    async fn find_room_occupancy(&self, room_id: RoomId) -> AppResult<Option<RoomOccupancy>> {
        let row: Option<RoomOccupancyRow> = sqlx::query_as(
            r#"
                SELECT
                    r.capacity AS capacity,
                    COUNT(b.booking_id) AS current_count
                FROM rooms AS r
                LEFT OUTER JOIN bookings AS b ON b.room_id = r.room_id
                WHERE r.room_id = $1
                GROUP BY r.room_id, r.capacity
            "#,
        )
        .bind(room_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(RoomOccupancy::from))
    }
}
