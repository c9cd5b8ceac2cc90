use axum::{
    extract::{Path, State},
    Json,
};
use garde::Validate;
use kernel::model::id::{BookingId, RoomId};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::AuthorizedUser,
    model::booking::{
        BookingIdResponse, BookingResponse, CreateBookingRequest, UpdateBookingRequest,
    },
};

pub async fn get_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    registry
        .booking_service()
        .find_by_user_id(user.id())
        .await
        .map(BookingResponse::from)
        .map(Json)
}

pub async fn create_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<Json<BookingIdResponse>> {
    req.validate(&())?;

    registry
        .booking_service()
        .create(user.id(), RoomId::new(req.room_id))
        .await
        .map(BookingIdResponse::from)
        .map(Json)
}

pub async fn update_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateBookingRequest>,
) -> AppResult<Json<BookingIdResponse>> {
    req.validate(&())?;

    registry
        .booking_service()
        .change_room(user.id(), booking_id, RoomId::new(req.room_id))
        .await
        .map(BookingIdResponse::from)
        .map(Json)
}
