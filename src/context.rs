//! Application Context
//!
//! Shared state provided via Leptos Context API: current route, reload
//! triggers for the fetched caches, and the transient toast queue.

use leptos::prelude::*;

use crate::route::{self, Route};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub text: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current route - read
    pub route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
    /// Trigger to reload task data - read
    pub tasks_reload: ReadSignal<u32>,
    set_tasks_reload: WriteSignal<u32>,
    /// Trigger to reload POS data - read
    pub pos_reload: ReadSignal<u32>,
    set_pos_reload: WriteSignal<u32>,
    /// Transient notifications
    pub toasts: RwSignal<Vec<Toast>>,
    next_toast_id: RwSignal<u32>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        let (tasks_reload, set_tasks_reload) = signal(0u32);
        let (pos_reload, set_pos_reload) = signal(0u32);
        Self {
            route: route.0,
            set_route: route.1,
            tasks_reload,
            set_tasks_reload,
            pos_reload,
            set_pos_reload,
            toasts: RwSignal::new(Vec::new()),
            next_toast_id: RwSignal::new(0),
        }
    }

    /// Navigate: update the signal and keep the location hash in sync
    pub fn navigate(&self, target: Route) {
        self.set_route.set(target);
        route::set_location_hash(target);
    }

    /// Route changed underneath us (hashchange, back button)
    pub fn sync_route(&self, target: Route) {
        self.set_route.set(target);
    }

    /// Trigger a reload of task data
    pub fn reload_tasks(&self) {
        self.set_tasks_reload.update(|v| *v += 1);
    }

    /// Trigger a reload of POS data
    pub fn reload_pos(&self) {
        self.set_pos_reload.update(|v| *v += 1);
    }

    pub fn toast_error(&self, text: impl Into<String>) {
        self.push_toast(ToastKind::Error, text.into());
    }

    pub fn toast_info(&self, text: impl Into<String>) {
        self.push_toast(ToastKind::Info, text.into());
    }

    fn push_toast(&self, kind: ToastKind, text: String) {
        let id = self.next_toast_id.get_untracked();
        self.next_toast_id.set(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, kind, text }));
    }

    pub fn dismiss_toast(&self, id: u32) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
