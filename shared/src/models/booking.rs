//! Booking Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Booking status (预订状态)
///
/// No transition graph is enforced; any status may replace any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    CheckedIn,
    Completed,
    Cancelled,
}

/// Booking entity
///
/// No consistency between `status` and the check-in/check-out range is
/// enforced anywhere (known gap, pending a product decision).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id: i64,
    pub customer_id: i64,
    pub room_id: i64,
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: DateTime<Utc>,
    pub total_price: f64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create booking payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreate {
    pub customer_id: i64,
    pub room_id: i64,
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: DateTime<Utc>,
    pub total_price: f64,
    /// Defaults to `pending` when omitted
    pub status: Option<BookingStatus>,
}

/// Update booking payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingUpdate {
    pub customer_id: Option<i64>,
    pub room_id: Option<i64>,
    pub check_in_date: Option<DateTime<Utc>>,
    pub check_out_date: Option<DateTime<Utc>>,
    pub total_price: Option<f64>,
    pub status: Option<BookingStatus>,
}
