//! Session Store
//!
//! Tab-scoped session: tokens, profile, entitlements, branding. Provided once
//! at the root as an explicit context object with a defined lifecycle
//! (restore-on-load, replace-on-refresh, clear-on-401) instead of ambient
//! singleton access.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::api;
use crate::models::{Branding, Entitlement, ModuleCode, TokenPair, UserProfile};
use crate::role::ViewerRole;
use crate::route::{self, Route};

const STORAGE_KEY: &str = "opshub.session";

/// Token snapshot persisted to sessionStorage; survives a reload, dies with
/// the tab. Profile and entitlements are refetched, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredTokens {
    access_token: String,
    refresh_token: String,
}

/// Session signals provided via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    tokens: ReadSignal<Option<TokenPair>>,
    set_tokens: WriteSignal<Option<TokenPair>>,
    pub user: ReadSignal<Option<UserProfile>>,
    set_user: WriteSignal<Option<UserProfile>>,
    pub entitlements: ReadSignal<Vec<Entitlement>>,
    set_entitlements: WriteSignal<Vec<Entitlement>>,
    pub role: ReadSignal<ViewerRole>,
    set_role: WriteSignal<ViewerRole>,
    api_base: StoredValue<String>,
}

impl SessionContext {
    pub fn new(api_base: String) -> Self {
        let (tokens, set_tokens) = signal(None::<TokenPair>);
        let (user, set_user) = signal(None::<UserProfile>);
        let (entitlements, set_entitlements) = signal(Vec::<Entitlement>::new());
        let (role, set_role) = signal(ViewerRole::default());
        Self {
            tokens,
            set_tokens,
            user,
            set_user,
            entitlements,
            set_entitlements,
            role,
            set_role,
            api_base: StoredValue::new(api_base),
        }
    }

    pub fn api_base(&self) -> String {
        self.api_base.get_value()
    }

    pub fn access_token(&self) -> Option<String> {
        self.tokens.get_untracked().map(|t| t.access_token)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.tokens.get_untracked().map(|t| t.refresh_token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.get().is_some()
    }

    pub fn branding(&self) -> Option<Branding> {
        self.user.get().and_then(|u| u.branding)
    }

    pub fn module_enabled(&self, module: ModuleCode) -> bool {
        self.entitlements
            .get()
            .iter()
            .any(|e| e.module == module && e.enabled)
    }

    /// Install a token pair (login or refresh) and persist it for the tab
    pub fn install_tokens(&self, tokens: TokenPair) {
        persist_tokens(&tokens);
        self.set_tokens.set(Some(tokens));
    }

    /// Install the profile and resolve the viewer role once
    pub fn install_profile(&self, user: UserProfile) {
        self.set_role.set(ViewerRole::resolve(&user));
        self.set_user.set(Some(user));
    }

    pub fn install_entitlements(&self, entitlements: Vec<Entitlement>) {
        self.set_entitlements.set(entitlements);
    }

    /// Drop all session state, including the persisted tokens
    pub fn clear(&self) {
        clear_stored_tokens();
        self.set_tokens.set(None);
        self.set_user.set(None);
        self.set_entitlements.set(Vec::new());
        self.set_role.set(ViewerRole::default());
    }

    /// 401 teardown path: clear and send the user to the login route
    pub fn expire(&self) {
        web_sys::console::log_1(&"[SESSION] cleared after 401".into());
        self.clear();
        route::set_location_hash(Route::Login);
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

/// Restore-on-load: pick up tokens left in sessionStorage by a previous page
/// load in this tab, validate them against `/auth/me`, and pull entitlements.
/// A stale access token gets one refresh attempt; anything else tears down.
/// Returns true when a session was established.
pub async fn restore_on_load(session: SessionContext) -> bool {
    let Some(stored) = load_stored_tokens() else {
        return false;
    };
    session.set_tokens.set(Some(TokenPair {
        access_token: stored.access_token,
        refresh_token: stored.refresh_token,
    }));

    let profile = match api::auth::me(session).await {
        Ok(profile) => Some(profile),
        Err(api::ApiError::Unauthorized) => {
            let Some(refresh_token) = session.refresh_token() else {
                return false;
            };
            match api::auth::refresh(session, &refresh_token).await {
                Ok(tokens) => {
                    session.install_tokens(tokens);
                    api::auth::me(session).await.ok()
                }
                Err(_) => None,
            }
        }
        Err(_) => None,
    };

    let Some(profile) = profile else {
        session.clear();
        return false;
    };
    session.install_profile(profile);

    match api::entitlements::list(session).await {
        Ok(entitlements) => session.install_entitlements(entitlements),
        Err(e) => {
            web_sys::console::warn_1(
                &format!("[SESSION] entitlements fetch failed: {}", e).into(),
            );
        }
    }
    true
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

fn persist_tokens(tokens: &TokenPair) {
    let Some(store) = storage() else { return };
    let stored = StoredTokens {
        access_token: tokens.access_token.clone(),
        refresh_token: tokens.refresh_token.clone(),
    };
    if let Ok(json) = serde_json::to_string(&stored) {
        let _ = store.set_item(STORAGE_KEY, &json);
    }
}

fn load_stored_tokens() -> Option<StoredTokens> {
    let raw = storage()?.get_item(STORAGE_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

fn clear_stored_tokens() {
    if let Some(store) = storage() {
        let _ = store.remove_item(STORAGE_KEY);
    }
}
