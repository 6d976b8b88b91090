//! Entitlement Models
//!
//! Per-tenant module gating (matches backend `/entitlements`).

use serde::{Deserialize, Serialize};

/// Pluggable platform modules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleCode {
    Crm,
    Hrm,
    Pos,
    Tasks,
    Booking,
    Landing,
    Ai,
}

impl ModuleCode {
    pub const ALL: &'static [ModuleCode] = &[
        ModuleCode::Crm,
        ModuleCode::Hrm,
        ModuleCode::Pos,
        ModuleCode::Tasks,
        ModuleCode::Booking,
        ModuleCode::Landing,
        ModuleCode::Ai,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ModuleCode::Crm => "CRM",
            ModuleCode::Hrm => "HRM",
            ModuleCode::Pos => "Point of Sale",
            ModuleCode::Tasks => "Tasks",
            ModuleCode::Booking => "Booking",
            ModuleCode::Landing => "Landing Pages",
            ModuleCode::Ai => "AI Assistant",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleCode::Crm => "crm",
            ModuleCode::Hrm => "hrm",
            ModuleCode::Pos => "pos",
            ModuleCode::Tasks => "tasks",
            ModuleCode::Booking => "booking",
            ModuleCode::Landing => "landing",
            ModuleCode::Ai => "ai",
        }
    }
}

/// Entitlement row for one module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entitlement {
    pub module: ModuleCode,
    pub enabled: bool,
    #[serde(default)]
    pub seats: u32,
    #[serde(default)]
    pub ai_access: bool,
}
