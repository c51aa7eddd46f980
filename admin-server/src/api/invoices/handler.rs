//! Invoice API Handlers
//!
//! 金额一律服务端计算；客户端提交的 subtotal/total 被忽略。

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;

use shared::models::{Invoice, InvoiceCreate, InvoiceUpdate};
use shared::{AppError, AppResult, ErrorCode};

use crate::core::ServerState;
use crate::store::invoice;

/// GET /api/invoices - 获取所有账单
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Invoice>> {
    Json(invoice::find_all(&state.stores).await)
}

/// GET /api/invoices/:id - 获取单个账单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Invoice>> {
    invoice::find_by_id(&state.stores, &id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::new(ErrorCode::InvoiceNotFound).with_detail("id", id))
}

/// POST /api/invoices - 创建账单
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<InvoiceCreate>,
) -> AppResult<(StatusCode, Json<Invoice>)> {
    let created = invoice::create(&state.stores, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/invoices/:id - 更新账单
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<InvoiceUpdate>,
) -> AppResult<Json<Invoice>> {
    let updated = invoice::update(&state.stores, &id, payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/invoices/:id - 删除账单
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if invoice::delete(&state.stores, &id).await {
        Ok(Json(true))
    } else {
        Err(AppError::new(ErrorCode::InvoiceNotFound).with_detail("id", id))
    }
}
