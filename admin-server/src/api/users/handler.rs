//! User API Handlers
//!
//! 所有响应使用 [`UserResponse`]，密码字段不出网。

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;

use shared::models::{UserCreate, UserResponse, UserUpdate};
use shared::{AppError, AppResult, ErrorCode};

use crate::core::ServerState;
use crate::store::user;

/// GET /api/users - 获取所有员工账户
pub async fn list(State(state): State<ServerState>) -> Json<Vec<UserResponse>> {
    Json(user::find_all(&state.stores).await)
}

/// GET /api/users/:id - 获取单个员工账户
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserResponse>> {
    user::find_by_id(&state.stores, &id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound).with_detail("id", id))
}

/// POST /api/users - 创建员工账户
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let created = user::create(&state.stores, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/users/:id - 更新员工账户
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<UserUpdate>,
) -> AppResult<Json<UserResponse>> {
    let updated = user::update(&state.stores, &id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/users/:id - 删除员工账户
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if user::delete(&state.stores, &id).await {
        Ok(Json(true))
    } else {
        Err(AppError::new(ErrorCode::UserNotFound).with_detail("id", id))
    }
}
