//! Unified error handling
//!
//! - [`ErrorCode`] - numeric error codes shared with the front end
//! - [`AppError`] - application error type with axum integration
//! - [`ApiResponse`] - unified response envelope

pub mod category;
pub mod codes;
pub mod http;
pub mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
