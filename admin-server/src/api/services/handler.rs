//! Service API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;

use shared::models::{Service, ServiceCreate, ServiceUpdate};
use shared::{AppError, AppResult, ErrorCode};

use crate::core::ServerState;
use crate::store::service;

/// GET /api/services - 获取所有服务项目
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Service>> {
    Json(service::find_all(&state.stores).await)
}

/// GET /api/services/:id - 获取单个服务项目
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Service>> {
    service::find_by_id(&state.stores, &id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::new(ErrorCode::ServiceNotFound).with_detail("id", id))
}

/// POST /api/services - 创建服务项目
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ServiceCreate>,
) -> AppResult<(StatusCode, Json<Service>)> {
    let created = service::create(&state.stores, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/services/:id - 更新服务项目
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ServiceUpdate>,
) -> AppResult<Json<Service>> {
    let updated = service::update(&state.stores, &id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/services/:id - 删除服务项目
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if service::delete(&state.stores, &id).await {
        Ok(Json(true))
    } else {
        Err(AppError::new(ErrorCode::ServiceNotFound).with_detail("id", id))
    }
}
