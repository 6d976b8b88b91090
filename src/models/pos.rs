//! POS Models
//!
//! Server-owned financial records; the client only displays these and submits
//! create/patch requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Other,
}

impl PaymentMethod {
    pub const ALL: &'static [PaymentMethod] =
        &[PaymentMethod::Cash, PaymentMethod::Card, PaymentMethod::Other];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosRegister {
    pub id: u32,
    pub name: String,
    /// Open session on this register, if any
    pub open_session_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterSession {
    pub id: u32,
    pub register_id: u32,
    pub opening_cents: i64,
    pub closing_cents: Option<i64>,
    pub opened_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosProduct {
    pub id: u32,
    pub name: String,
    pub price_cents: i64,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KitchenStatus {
    Pending,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleLine {
    pub product_id: u32,
    pub name: String,
    pub unit_cents: i64,
    pub qty: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: u32,
    pub register_session_id: u32,
    pub lines: Vec<SaleLine>,
    pub subtotal_cents: i64,
    #[serde(default)]
    pub tax_cents: i64,
    pub total_cents: i64,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub kitchen_status: Option<KitchenStatus>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    pub id: u32,
    pub sale_id: u32,
    pub lines: Vec<SaleLine>,
    pub total_cents: i64,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
}

/// Pre-rendered receipt for a sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub sale_id: u32,
    pub header: String,
    pub lines: Vec<String>,
    pub total_cents: i64,
}

/// Owner-gated analytics summary (matches backend `/modules/pos/analytics/summary`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosAnalyticsSummary {
    pub sales_today_cents: i64,
    pub sales_week_cents: i64,
    pub sale_count_today: u32,
    pub refund_count_today: u32,
}
