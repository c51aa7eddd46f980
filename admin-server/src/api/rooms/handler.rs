//! Room API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;

use shared::models::{Room, RoomCreate, RoomUpdate};
use shared::{AppError, AppResult, ErrorCode};

use crate::core::ServerState;
use crate::store::room;

/// GET /api/rooms - 获取所有房间
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Room>> {
    Json(room::find_all(&state.stores).await)
}

/// GET /api/rooms/:id - 获取单个房间
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Room>> {
    room::find_by_id(&state.stores, id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::new(ErrorCode::RoomNotFound).with_detail("roomId", id))
}

/// GET /api/rooms/by-type/:room_type - 按房型查找第一个房间
pub async fn get_by_room_type(
    State(state): State<ServerState>,
    Path(room_type): Path<String>,
) -> AppResult<Json<Room>> {
    room::find_by_room_type(&state.stores, &room_type)
        .await
        .map(Json)
        .ok_or_else(|| AppError::new(ErrorCode::RoomNotFound).with_detail("roomType", room_type))
}

/// POST /api/rooms - 创建房间
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RoomCreate>,
) -> AppResult<(StatusCode, Json<Room>)> {
    let created = room::create(&state.stores, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/rooms/:id - 更新房间
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<RoomUpdate>,
) -> AppResult<Json<Room>> {
    let updated = room::update(&state.stores, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/rooms/:id - 删除房间
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    if room::delete(&state.stores, id).await {
        Ok(Json(true))
    } else {
        Err(AppError::new(ErrorCode::RoomNotFound).with_detail("roomId", id))
    }
}
