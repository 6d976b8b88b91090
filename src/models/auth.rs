//! Auth Models
//!
//! Token pair and user profile shapes (matches backend).

use serde::{Deserialize, Serialize};

/// Token pair returned by login and refresh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Current user profile (matches backend `/auth/me`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u32,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_super_admin: bool,
    #[serde(default)]
    pub is_company_admin: bool,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub branding: Option<Branding>,
}

/// Tenant branding preferences carried on the profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branding {
    pub company_name: String,
    #[serde(default)]
    pub accent_color: Option<String>,
}
