//! Service Usage API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;

use shared::models::{ServiceUsage, ServiceUsageCreate, ServiceUsageUpdate};
use shared::{AppError, AppResult, ErrorCode};

use crate::core::ServerState;
use crate::store::service_usage;

/// GET /api/service-usage - 获取所有消费记录
pub async fn list(State(state): State<ServerState>) -> Json<Vec<ServiceUsage>> {
    Json(service_usage::find_all(&state.stores).await)
}

/// GET /api/service-usage/:id - 获取单条消费记录
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ServiceUsage>> {
    service_usage::find_by_id(&state.stores, id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::new(ErrorCode::UsageNotFound).with_detail("usageId", id))
}

/// POST /api/service-usage - 记录服务消费
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ServiceUsageCreate>,
) -> AppResult<(StatusCode, Json<ServiceUsage>)> {
    let created = service_usage::create(&state.stores, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/service-usage/:id - 更新消费记录
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ServiceUsageUpdate>,
) -> AppResult<Json<ServiceUsage>> {
    let updated = service_usage::update(&state.stores, id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/service-usage/:id - 删除消费记录
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    if service_usage::delete(&state.stores, id).await {
        Ok(Json(true))
    } else {
        Err(AppError::new(ErrorCode::UsageNotFound).with_detail("usageId", id))
    }
}
