//! Room Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Room status (房间状态)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Available,
    Booked,
    Maintenance,
}

/// Room entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub room_id: i64,
    /// Alphanumeric room number, unique across rooms
    pub room_num: String,
    pub room_type: String,
    pub price: f64,
    pub status: RoomStatus,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create room payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCreate {
    pub room_num: String,
    pub room_type: String,
    pub price: f64,
    /// Defaults to `available` when omitted
    pub status: Option<RoomStatus>,
    pub description: String,
}

/// Update room payload (merged over the existing record)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomUpdate {
    pub room_num: Option<String>,
    pub room_type: Option<String>,
    pub price: Option<f64>,
    pub status: Option<RoomStatus>,
    pub description: Option<String>,
}
