//! Booking API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;

use shared::models::{Booking, BookingCreate, BookingUpdate};
use shared::{AppError, AppResult, ErrorCode};

use crate::core::ServerState;
use crate::store::booking;

/// GET /api/bookings - 获取所有预订
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Booking>> {
    Json(booking::find_all(&state.stores).await)
}

/// GET /api/bookings/:id - 获取单个预订
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Booking>> {
    booking::find_by_id(&state.stores, id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::new(ErrorCode::BookingNotFound).with_detail("bookingId", id))
}

/// POST /api/bookings - 创建预订
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BookingCreate>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let created = booking::create(&state.stores, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/bookings/:id - 更新预订
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<BookingUpdate>,
) -> AppResult<Json<Booking>> {
    let updated = booking::update(&state.stores, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/bookings/:id - 删除预订
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    if booking::delete(&state.stores, id).await {
        Ok(Json(true))
    } else {
        Err(AppError::new(ErrorCode::BookingNotFound).with_detail("bookingId", id))
    }
}
