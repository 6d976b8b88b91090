//! Entitlement Endpoints

use super::{ApiResult, SessionContext};
use crate::models::Entitlement;

pub async fn list(session: SessionContext) -> ApiResult<Vec<Entitlement>> {
    super::get_json(session, "/entitlements").await
}
