//! Viewer Role
//!
//! Single sum type resolved once from the profile at session init; pages
//! dispatch on the variant instead of re-checking admin flags.

use crate::models::UserProfile;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewerRole {
    SuperAdmin,
    CompanyAdmin,
    #[default]
    Staff,
}

impl ViewerRole {
    /// Super-admin flag wins over company-admin; role strings from the backend
    /// ("owner", "admin") also grant company-admin.
    pub fn resolve(user: &UserProfile) -> Self {
        if user.is_super_admin {
            ViewerRole::SuperAdmin
        } else if user.is_company_admin || user.roles.iter().any(|r| r == "owner" || r == "admin") {
            ViewerRole::CompanyAdmin
        } else {
            ViewerRole::Staff
        }
    }

    /// Owner-gated surfaces (POS analytics, billing history)
    pub fn is_owner(&self) -> bool {
        matches!(self, ViewerRole::SuperAdmin | ViewerRole::CompanyAdmin)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewerRole::SuperAdmin => "Super Admin",
            ViewerRole::CompanyAdmin => "Company Admin",
            ViewerRole::Staff => "Staff",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;

    fn make_user(is_super: bool, is_company: bool, roles: &[&str]) -> UserProfile {
        UserProfile {
            id: 1,
            email: "user@example.com".to_string(),
            name: "User".to_string(),
            is_super_admin: is_super,
            is_company_admin: is_company,
            roles: roles.iter().map(|r| r.to_string()).collect(),
            branding: None,
        }
    }

    #[test]
    fn test_super_admin_wins() {
        let user = make_user(true, true, &["staff"]);
        assert_eq!(ViewerRole::resolve(&user), ViewerRole::SuperAdmin);
    }

    #[test]
    fn test_company_admin_from_flag() {
        let user = make_user(false, true, &[]);
        assert_eq!(ViewerRole::resolve(&user), ViewerRole::CompanyAdmin);
    }

    #[test]
    fn test_company_admin_from_role_string() {
        let user = make_user(false, false, &["owner"]);
        assert_eq!(ViewerRole::resolve(&user), ViewerRole::CompanyAdmin);
    }

    #[test]
    fn test_staff_default() {
        let user = make_user(false, false, &["staff"]);
        assert_eq!(ViewerRole::resolve(&user), ViewerRole::Staff);
        assert!(!ViewerRole::Staff.is_owner());
    }
}
