//! Route Handling
//!
//! Hash-based routes: one page component per variant, dispatched in `App`.
//! Every route except `Login` requires a live session.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Onboarding,
    Dashboard,
    TasksList,
    TasksBoard,
    TaskTemplates,
    PosRegisters,
    PosCheckout,
    PosRefunds,
    PosReceipts,
    Kitchen,
    PosAnalytics,
    BillingHistory,
}

impl Route {
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        match path {
            "login" => Route::Login,
            "onboarding" => Route::Onboarding,
            "" | "dashboard" => Route::Dashboard,
            "tasks" => Route::TasksList,
            "tasks/board" => Route::TasksBoard,
            "tasks/templates" => Route::TaskTemplates,
            "pos/registers" => Route::PosRegisters,
            "pos/checkout" => Route::PosCheckout,
            "pos/refunds" => Route::PosRefunds,
            "pos/receipts" => Route::PosReceipts,
            "pos/kitchen" => Route::Kitchen,
            "pos/analytics" => Route::PosAnalytics,
            "billing" => Route::BillingHistory,
            _ => Route::Dashboard,
        }
    }

    pub fn hash(&self) -> &'static str {
        match self {
            Route::Login => "#/login",
            Route::Onboarding => "#/onboarding",
            Route::Dashboard => "#/dashboard",
            Route::TasksList => "#/tasks",
            Route::TasksBoard => "#/tasks/board",
            Route::TaskTemplates => "#/tasks/templates",
            Route::PosRegisters => "#/pos/registers",
            Route::PosCheckout => "#/pos/checkout",
            Route::PosRefunds => "#/pos/refunds",
            Route::PosReceipts => "#/pos/receipts",
            Route::Kitchen => "#/pos/kitchen",
            Route::PosAnalytics => "#/pos/analytics",
            Route::BillingHistory => "#/billing",
        }
    }

    /// Routes reachable without a session
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login)
    }
}

/// Read the current route from the window location
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|h| Route::from_hash(&h))
        .unwrap_or(Route::Dashboard)
}

/// Write a route into the window location (no-op outside the browser)
pub fn set_location_hash(route: Route) {
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_hash(route.hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hash_known_paths() {
        assert_eq!(Route::from_hash("#/login"), Route::Login);
        assert_eq!(Route::from_hash("#/tasks/board"), Route::TasksBoard);
        assert_eq!(Route::from_hash("#/pos/kitchen"), Route::Kitchen);
        assert_eq!(Route::from_hash("#/billing"), Route::BillingHistory);
    }

    #[test]
    fn test_from_hash_defaults_to_dashboard() {
        assert_eq!(Route::from_hash(""), Route::Dashboard);
        assert_eq!(Route::from_hash("#/"), Route::Dashboard);
        assert_eq!(Route::from_hash("#/no-such-page"), Route::Dashboard);
    }

    #[test]
    fn test_hash_round_trip() {
        let routes = [
            Route::Login,
            Route::Onboarding,
            Route::Dashboard,
            Route::TasksList,
            Route::TasksBoard,
            Route::TaskTemplates,
            Route::PosRegisters,
            Route::PosCheckout,
            Route::PosRefunds,
            Route::PosReceipts,
            Route::Kitchen,
            Route::PosAnalytics,
            Route::BillingHistory,
        ];
        for route in routes {
            assert_eq!(Route::from_hash(route.hash()), route);
        }
    }

    #[test]
    fn test_only_login_is_public() {
        assert!(Route::Login.is_public());
        assert!(!Route::Dashboard.is_public());
        assert!(!Route::PosCheckout.is_public());
    }
}
