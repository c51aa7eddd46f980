//! Invoice Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Invoice status (账单状态)
///
/// No transition graph is enforced; any status may replace any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Cancelled,
}

/// One service charge row within an invoice
///
/// `total` is always derived as `quantity * price` by the server; values
/// supplied by clients are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub service_id: String,
    pub service_name: String,
    pub quantity: i64,
    pub price: f64,
    pub total: f64,
}

/// Line item as submitted by clients (no derived total)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemInput {
    pub service_id: String,
    pub service_name: String,
    pub quantity: i64,
    pub price: f64,
}

/// Invoice entity
///
/// Invariant after every successful write:
/// `subtotal == Σ item.total` and `total == subtotal + tax`.
/// `tax` is a flat amount added to the subtotal, not a rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    /// Denormalized customer reference; no referential integrity is enforced
    pub customer_id: String,
    pub customer_name: String,
    pub items: Vec<InvoiceItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub status: InvoiceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create invoice payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceCreate {
    pub customer_id: String,
    pub customer_name: String,
    pub items: Vec<InvoiceItemInput>,
    /// Flat tax amount, defaults to 0
    pub tax: Option<f64>,
    pub status: InvoiceStatus,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
}

/// Update invoice payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceUpdate {
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub items: Option<Vec<InvoiceItemInput>>,
    pub tax: Option<f64>,
    pub status: Option<InvoiceStatus>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
}
