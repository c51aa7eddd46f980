//! 认证中间件
//!
//! 为静态 Bearer Token 认证提供 Axum 中间件

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use shared::AppError;

use crate::auth::extract_bearer;
use crate::core::ServerState;
use crate::security_log;

/// 认证中间件 - 要求携带有效 API 令牌
///
/// 从 `Authorization: Bearer <token>` 头提取令牌并与配置的
/// `API_TOKEN` 比对。
///
/// # 跳过认证的路径
///
/// - `OPTIONS *` (CORS 预检)
/// - 非 `/api/` 路径
/// - `/api/health` (健康检查)
///
/// # 错误处理
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 服务端未配置 API_TOKEN | 503 Service Unavailable |
/// | 无 Authorization 头 | 401 Unauthorized |
/// | 令牌不匹配 | 401 Unauthorized |
pub async fn require_auth(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // 允许 CORS 预检的 OPTIONS 请求 (跳过认证)
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // 非 API 路由跳过认证 (让它们正常返回 404)
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    // 公共 API 路由跳过认证
    if path == "/api/health" {
        return Ok(next.run(req).await);
    }

    // 未配置令牌是部署问题，不是客户端问题
    let Some(expected) = state.config.api_token.as_deref() else {
        security_log!("ERROR", "auth_unconfigured", uri = format!("{:?}", req.uri()));
        return Err(AppError::config(
            "Server configuration error: API_TOKEN is not set",
        ));
    };

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header.and_then(extract_bearer) {
        Some(token) => token,
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::not_authenticated());
        }
    };

    if token != expected {
        security_log!("WARN", "auth_failed", uri = format!("{:?}", req.uri()));
        return Err(AppError::invalid_token("Invalid API token"));
    }

    Ok(next.run(req).await)
}
