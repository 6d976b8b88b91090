//! Onboarding Endpoints

use super::{ApiResult, SessionContext};
use crate::onboarding::OnboardingDraft;

/// Submit the completed wizard; backend provisions modules and returns nothing
pub async fn complete(session: SessionContext, draft: &OnboardingDraft) -> ApiResult<()> {
    let _: serde_json::Value = super::post_json(session, "/onboarding/complete", draft).await?;
    Ok(())
}
