use axum::{
    extract::{Path, State},
    Json,
};
use kernel::model::id::HotelId;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::AuthorizedUser,
    model::hotel::{HotelWithRoomsResponse, HotelsResponse},
};

pub async fn show_hotel_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<HotelsResponse>> {
    registry
        .hotel_service()
        .list(user.id())
        .await
        .map(HotelsResponse::from)
        .map(Json)
}

pub async fn show_hotel(
    user: AuthorizedUser,
    Path(hotel_id): Path<HotelId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<HotelWithRoomsResponse>> {
    registry
        .hotel_service()
        .find_with_rooms(user.id(), hotel_id)
        .await
        .map(HotelWithRoomsResponse::from)
        .map(Json)
}
