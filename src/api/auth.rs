//! Auth Endpoints
//!
//! Login, refresh, and the profile probe. These use the raw request variants:
//! a 401 here means bad credentials or a dead session, not something to tear
//! down twice.

use serde::Serialize;

use super::{ApiResult, SessionContext};
use crate::models::{TokenPair, UserProfile};

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshArgs<'a> {
    refresh_token: &'a str,
}

pub async fn login(session: SessionContext, email: &str, password: &str) -> ApiResult<TokenPair> {
    super::post_json_unauthenticated(session, "/auth/login", &LoginArgs { email, password }).await
}

pub async fn refresh(session: SessionContext, refresh_token: &str) -> ApiResult<TokenPair> {
    super::post_json_unauthenticated(session, "/auth/refresh", &RefreshArgs { refresh_token })
        .await
}

pub async fn me(session: SessionContext) -> ApiResult<UserProfile> {
    super::get_json_no_teardown(session, "/auth/me").await
}
