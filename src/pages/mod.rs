//! Pages
//!
//! One component per route; `App` dispatches on the `Route` variant.

mod billing_history;
mod dashboard;
mod kanban_board;
mod kitchen;
mod login;
mod onboarding;
mod pos_analytics;
mod pos_checkout;
mod pos_receipts;
mod pos_refunds;
mod pos_registers;
mod tasks_list;
mod templates;

pub use billing_history::BillingHistoryPage;
pub use dashboard::DashboardPage;
pub use kanban_board::KanbanBoardPage;
pub use kitchen::KitchenPage;
pub use login::LoginPage;
pub use onboarding::OnboardingPage;
pub use pos_analytics::PosAnalyticsPage;
pub use pos_checkout::PosCheckoutPage;
pub use pos_receipts::PosReceiptsPage;
pub use pos_refunds::PosRefundsPage;
pub use pos_registers::PosRegistersPage;
pub use tasks_list::TasksListPage;
pub use templates::TaskTemplatesPage;
