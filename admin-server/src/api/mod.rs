//! HTTP API 模块
//!
//! 每个实体一个子模块，各自暴露 `router()`，在 [`build_app`] 中合并。

pub mod bookings;
pub mod customers;
pub mod health;
pub mod invoices;
pub mod rooms;
pub mod service_usage;
pub mod services;
pub mod users;

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::auth::require_auth;
use crate::core::ServerState;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        // Public routes
        .merge(health::router())
        // Entity APIs
        .merge(rooms::router())
        .merge(bookings::router())
        .merge(customers::router())
        .merge(users::router())
        .merge(services::router())
        .merge(invoices::router())
        .merge(service_usage::router())
}

/// 绑定状态与中间件的完整应用
pub fn app(state: ServerState) -> Router {
    build_app()
        // Bearer Token 认证中间件 - require_auth 内部会跳过公共路由
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
        // Tower HTTP 中间件
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(log_request))
}
