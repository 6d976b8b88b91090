//! Opshub Frontend App
//!
//! Root component: session restore, route dispatch, and the task-data loader
//! the list and board views share.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{ActiveTimerWidget, ModuleGate, NavBar, ToastHost};
use crate::config;
use crate::context::AppContext;
use crate::kanban::build_columns;
use crate::models::ModuleCode;
use crate::pages::*;
use crate::route::{self, Route};
use crate::session::{self, SessionContext};
use crate::store::{store_set_columns, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let app_config = config::load();
    let poll_secs = app_config.timer_poll_secs;

    // State
    let (route_sig, set_route) = signal(route::current_route());
    let (session_checked, set_session_checked) = signal(false);

    let session = SessionContext::new(app_config.api_base.clone());
    let ctx = AppContext::new((route_sig, set_route));
    let store = AppStore::new(AppState::default());

    // Provide context to all children
    provide_context(session);
    provide_context(ctx);
    provide_context(store);

    // Keep the route signal in sync with the location hash (back button,
    // session teardown)
    {
        let on_hashchange = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            ctx.sync_route(route::current_route());
        });
        if let Some(win) = web_sys::window() {
            let _ = win.add_event_listener_with_callback(
                "hashchange",
                on_hashchange.as_ref().unchecked_ref(),
            );
        }
        on_hashchange.forget();
    }

    // Restore-on-load: tokens left in sessionStorage get one validation pass
    spawn_local(async move {
        let restored = session::restore_on_load(session).await;
        set_session_checked.set(true);
        if restored {
            web_sys::console::log_1(&"[SESSION] restored from storage".into());
            if ctx.route.get_untracked() == Route::Login {
                ctx.navigate(Route::Dashboard);
            }
        } else if !ctx.route.get_untracked().is_public() {
            ctx.navigate(Route::Login);
        }
    });

    // Load task data when the session is live or the trigger changes
    Effect::new(move |_| {
        let trigger = ctx.tasks_reload.get();
        if !session.is_authenticated() {
            return;
        }
        web_sys::console::log_1(
            &format!("[APP] Loading task data, trigger={}", trigger).into(),
        );
        spawn_local(async move {
            let statuses = match api::tasks::statuses(session).await {
                Ok(loaded) => loaded,
                Err(_) => return,
            };
            let tasks = match api::tasks::list(session).await {
                Ok(loaded) => loaded,
                Err(_) => return,
            };
            web_sys::console::log_1(
                &format!("[APP] Loaded {} tasks, {} statuses", tasks.len(), statuses.len())
                    .into(),
            );
            store_set_columns(&store, build_columns(&statuses, &tasks));
            *store.tasks().write() = tasks;
            *store.statuses().write() = statuses;

            if let Ok(loaded) = api::tasks::priorities(session).await {
                *store.priorities().write() = loaded;
            }
            if let Ok(loaded) = api::tasks::projects(session).await {
                *store.projects().write() = loaded;
            }
        });
    });

    view! {
        <div class="app-layout">
            <Show when=move || session.is_authenticated()>
                <NavBar />
                <ActiveTimerWidget poll_secs=poll_secs />
            </Show>

            <main class="main-content">
                {move || {
                    if !session_checked.get() {
                        return view! { <div class="app-loading">"Loading..."</div> }.into_any();
                    }
                    let current = ctx.route.get();
                    if !current.is_public() && !session.is_authenticated() {
                        return view! { <LoginPage /> }.into_any();
                    }
                    match current {
                        Route::Login => view! { <LoginPage /> }.into_any(),
                        Route::Onboarding => view! { <OnboardingPage /> }.into_any(),
                        Route::Dashboard => view! { <DashboardPage /> }.into_any(),
                        Route::TasksList => view! {
                            <ModuleGate module=ModuleCode::Tasks><TasksListPage /></ModuleGate>
                        }
                        .into_any(),
                        Route::TasksBoard => view! {
                            <ModuleGate module=ModuleCode::Tasks><KanbanBoardPage /></ModuleGate>
                        }
                        .into_any(),
                        Route::TaskTemplates => view! {
                            <ModuleGate module=ModuleCode::Tasks><TaskTemplatesPage /></ModuleGate>
                        }
                        .into_any(),
                        Route::PosRegisters => view! {
                            <ModuleGate module=ModuleCode::Pos><PosRegistersPage /></ModuleGate>
                        }
                        .into_any(),
                        Route::PosCheckout => view! {
                            <ModuleGate module=ModuleCode::Pos><PosCheckoutPage /></ModuleGate>
                        }
                        .into_any(),
                        Route::PosRefunds => view! {
                            <ModuleGate module=ModuleCode::Pos><PosRefundsPage /></ModuleGate>
                        }
                        .into_any(),
                        Route::PosReceipts => view! {
                            <ModuleGate module=ModuleCode::Pos><PosReceiptsPage /></ModuleGate>
                        }
                        .into_any(),
                        Route::Kitchen => view! {
                            <ModuleGate module=ModuleCode::Pos><KitchenPage /></ModuleGate>
                        }
                        .into_any(),
                        Route::PosAnalytics => view! {
                            <ModuleGate module=ModuleCode::Pos><PosAnalyticsPage /></ModuleGate>
                        }
                        .into_any(),
                        Route::BillingHistory => view! { <BillingHistoryPage /> }.into_any(),
                    }
                }}
            </main>

            <ToastHost />
        </div>
    }
}
