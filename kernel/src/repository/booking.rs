use crate::model::{
    booking::{
        event::{CreateBooking, ReassignBookingRoom},
        Booking,
    },
    id::{BookingId, UserId},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // 予約操作を行う
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    // 既存予約の部屋を付け替える
    async fn reassign_room(&self, event: ReassignBookingRoom) -> AppResult<()>;
    // ユーザー ID に紐づく現在の予約情報を取得する
    async fn find_active_by_user_id(&self, user_id: UserId) -> AppResult<Option<Booking>>;
}
