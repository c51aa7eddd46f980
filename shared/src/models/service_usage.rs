//! Service Usage Model (links a booking to a consumed service)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Service usage record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUsage {
    pub usage_id: i64,
    pub booking_id: i64,
    pub service_id: i64,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Record service usage payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUsageCreate {
    pub booking_id: i64,
    pub service_id: i64,
    pub quantity: i64,
}

/// Update service usage payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUsageUpdate {
    pub booking_id: Option<i64>,
    pub service_id: Option<i64>,
    pub quantity: Option<i64>,
}
