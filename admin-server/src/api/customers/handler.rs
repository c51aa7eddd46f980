//! Customer API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;

use shared::models::{Customer, CustomerCreate, CustomerUpdate};
use shared::{AppError, AppResult, ErrorCode};

use crate::core::ServerState;
use crate::store::customer;

/// GET /api/customers - 获取所有客户
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Customer>> {
    Json(customer::find_all(&state.stores).await)
}

/// GET /api/customers/:id - 获取单个客户
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Customer>> {
    customer::find_by_id(&state.stores, &id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::new(ErrorCode::CustomerNotFound).with_detail("id", id))
}

/// POST /api/customers - 创建客户
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CustomerCreate>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let created = customer::create(&state.stores, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/customers/:id - 更新客户
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CustomerUpdate>,
) -> AppResult<Json<Customer>> {
    let updated = customer::update(&state.stores, &id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/customers/:id - 删除客户
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if customer::delete(&state.stores, &id).await {
        Ok(Json(true))
    } else {
        Err(AppError::new(ErrorCode::CustomerNotFound).with_detail("id", id))
    }
}
