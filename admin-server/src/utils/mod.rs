//! 工具模块 - 校验、日志
//!
//! # 内容
//!
//! - [`validation`] - 字段级校验助手 (邮箱 / 电话 / 房间号 / 价格)
//! - [`logger`] - 日志初始化

pub mod logger;
pub mod validation;

// Re-export error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
