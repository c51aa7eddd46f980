//! Shared types for the hotel admin backend
//!
//! Common types used by the admin server and its tests: wire models,
//! error codes, the API response envelope, and utility types.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
