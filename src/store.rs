//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the fetched
//! caches pages render from; the session itself lives in `SessionContext`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::kanban::KanbanColumn;
use crate::models::{PosProduct, PosRegister, Task, TaskPriority, TaskProject, TaskStatus};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Task cache for the list view
    pub tasks: Vec<Task>,
    /// Status lookup; one kanban lane per row
    pub statuses: Vec<TaskStatus>,
    pub priorities: Vec<TaskPriority>,
    pub projects: Vec<TaskProject>,
    /// Cached column mapping the board renders from
    pub columns: Vec<KanbanColumn>,
    /// POS catalog
    pub products: Vec<PosProduct>,
    pub registers: Vec<PosRegister>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the board cache
pub fn store_set_columns(store: &AppStore, columns: Vec<KanbanColumn>) {
    *store.columns().write() = columns;
}

/// Restore a pre-drag snapshot (kanban rollback path)
pub fn store_restore_columns(store: &AppStore, snapshot: Vec<KanbanColumn>) {
    *store.columns().write() = snapshot;
}

/// Update a task in the store by ID
pub fn store_update_task(store: &AppStore, updated: Task) {
    store
        .tasks()
        .write()
        .iter_mut()
        .find(|task| task.id == updated.id)
        .map(|task| *task = updated);
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &AppStore, task_id: u32) {
    store.tasks().write().retain(|task| task.id != task_id);
}

/// Update a register in the store by ID
pub fn store_update_register(store: &AppStore, updated: PosRegister) {
    store
        .registers()
        .write()
        .iter_mut()
        .find(|reg| reg.id == updated.id)
        .map(|reg| *reg = updated);
}
