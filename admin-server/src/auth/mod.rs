//! 认证模块 - 静态 Bearer Token
//!
//! 单令牌方案：所有受保护接口共用 `API_TOKEN` 环境变量配置的
//! 令牌，不区分用户身份。

pub mod middleware;

pub use middleware::require_auth;

/// 从 `Authorization` 头提取 Bearer 令牌
///
/// 大小写敏感，格式必须是 `Bearer <token>`。
pub fn extract_bearer(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ").filter(|t| !t.is_empty())
}
