//! Billing Endpoints
//!
//! History only; the webhook endpoint is backend-to-backend.

use super::{ApiResult, SessionContext};
use crate::models::BillingEvent;

pub async fn history(session: SessionContext) -> ApiResult<Vec<BillingEvent>> {
    super::get_json(session, "/billing/history").await
}
