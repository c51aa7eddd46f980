//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the numeric range of the error code:
/// - 0xxx: General
/// - 1xxx: Auth
/// - 2xxx..8xxx: Business (room, booking, customer, user, service, invoice, usage)
/// - 9xxx: System
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    Auth,
    Business,
    System,
}

impl ErrorCode {
    /// Get the category for this error code
    pub const fn category(&self) -> ErrorCategory {
        let code = self.code();
        match code {
            0..=999 => ErrorCategory::General,
            1000..=1999 => ErrorCategory::Auth,
            2000..=8999 => ErrorCategory::Business,
            _ => ErrorCategory::System,
        }
    }
}
