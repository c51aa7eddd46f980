//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::RoomNotFound
            | Self::BookingNotFound
            | Self::CustomerNotFound
            | Self::UserNotFound
            | Self::ServiceNotFound
            | Self::InvoiceNotFound
            | Self::UsageNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists | Self::RoomNumberExists => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated | Self::TokenInvalid => StatusCode::UNAUTHORIZED,

            // 503 Service Unavailable
            // The server cannot authenticate anyone until API_TOKEN is set;
            // this is a deployment problem, not a client error.
            Self::ConfigError => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
