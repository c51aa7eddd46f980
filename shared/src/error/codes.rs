//! Unified error codes for the hotel admin backend
//!
//! Error codes are shared between the server and the admin front end.
//! They are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Room errors
//! - 3xxx: Booking errors
//! - 4xxx: Customer errors
//! - 5xxx: User errors
//! - 6xxx: Service errors
//! - 7xxx: Invoice errors
//! - 8xxx: Service usage errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// Caller is not authenticated
    NotAuthenticated = 1001,
    /// Bearer token does not match
    TokenInvalid = 1002,

    // ==================== 2xxx: Room ====================
    /// Room not found
    RoomNotFound = 2001,
    /// Room number already exists
    RoomNumberExists = 2002,
    /// Room price is invalid
    RoomInvalidPrice = 2003,

    // ==================== 3xxx: Booking ====================
    /// Booking not found
    BookingNotFound = 3001,

    // ==================== 4xxx: Customer ====================
    /// Customer not found
    CustomerNotFound = 4001,
    /// Customer email format is invalid
    CustomerInvalidEmail = 4002,
    /// Customer phone format is invalid
    CustomerInvalidPhone = 4003,

    // ==================== 5xxx: User ====================
    /// User not found
    UserNotFound = 5001,
    /// User email format is invalid
    UserInvalidEmail = 5002,

    // ==================== 6xxx: Service ====================
    /// Service not found
    ServiceNotFound = 6001,
    /// Service price is invalid
    ServiceInvalidPrice = 6002,

    // ==================== 7xxx: Invoice ====================
    /// Invoice not found
    InvoiceNotFound = 7001,
    /// Invoice has no line items
    InvoiceEmptyItems = 7002,
    /// Invoice line item is invalid
    InvoiceInvalidItem = 7003,

    // ==================== 8xxx: Service usage ====================
    /// Service usage record not found
    UsageNotFound = 8001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Configuration error (e.g. API token not set)
    ConfigError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "Caller is not authenticated",
            ErrorCode::TokenInvalid => "API token is invalid",

            // Room
            ErrorCode::RoomNotFound => "Room not found",
            ErrorCode::RoomNumberExists => "Room number already exists",
            ErrorCode::RoomInvalidPrice => "Invalid price",

            // Booking
            ErrorCode::BookingNotFound => "Booking not found",

            // Customer
            ErrorCode::CustomerNotFound => "Customer not found",
            ErrorCode::CustomerInvalidEmail => "Invalid email format",
            ErrorCode::CustomerInvalidPhone => "Invalid phone number",

            // User
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::UserInvalidEmail => "Invalid email format",

            // Service
            ErrorCode::ServiceNotFound => "Service not found",
            ErrorCode::ServiceInvalidPrice => "Invalid price",

            // Invoice
            ErrorCode::InvoiceNotFound => "Invoice not found",
            ErrorCode::InvoiceEmptyItems => "Invoice must have at least one item",
            ErrorCode::InvoiceInvalidItem => "Invoice line item is invalid",

            // Service usage
            ErrorCode::UsageNotFound => "Service usage record not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::ConfigError => "Server configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::TokenInvalid),

            // Room
            2001 => Ok(ErrorCode::RoomNotFound),
            2002 => Ok(ErrorCode::RoomNumberExists),
            2003 => Ok(ErrorCode::RoomInvalidPrice),

            // Booking
            3001 => Ok(ErrorCode::BookingNotFound),

            // Customer
            4001 => Ok(ErrorCode::CustomerNotFound),
            4002 => Ok(ErrorCode::CustomerInvalidEmail),
            4003 => Ok(ErrorCode::CustomerInvalidPhone),

            // User
            5001 => Ok(ErrorCode::UserNotFound),
            5002 => Ok(ErrorCode::UserInvalidEmail),

            // Service
            6001 => Ok(ErrorCode::ServiceNotFound),
            6002 => Ok(ErrorCode::ServiceInvalidPrice),

            // Invoice
            7001 => Ok(ErrorCode::InvoiceNotFound),
            7002 => Ok(ErrorCode::InvoiceEmptyItems),
            7003 => Ok(ErrorCode::InvoiceInvalidItem),

            // Service usage
            8001 => Ok(ErrorCode::UsageNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
