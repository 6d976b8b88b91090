//! Billing Models
//!
//! Read-only billing history rows; the webhook side lives entirely in the
//! backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingEvent {
    pub id: u32,
    pub occurred_at: DateTime<Utc>,
    pub description: String,
    pub amount_cents: i64,
    pub status: String,
}
