//! Dashboard Page
//!
//! Dispatches on the viewer role resolved at session init. Each role gets its
//! own layout; no boolean flag checks here or anywhere downstream.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::ModuleCode;
use crate::role::ViewerRole;
use crate::route::Route;
use crate::session::use_session;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();

    view! {
        {move || match session.role.get() {
            ViewerRole::SuperAdmin => view! { <SuperAdminDashboard /> }.into_any(),
            ViewerRole::CompanyAdmin => view! { <CompanyAdminDashboard /> }.into_any(),
            ViewerRole::Staff => view! { <StaffDashboard /> }.into_any(),
        }}
    }
}

#[component]
fn SuperAdminDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    view! {
        <div class="dashboard super-admin">
            <h1>"Platform Overview"</h1>
            <p class="dashboard-subtitle">
                {move || session.user.get().map(|u| format!("Signed in as {}", u.email)).unwrap_or_default()}
            </p>
            <div class="dashboard-tiles">
                <button class="dashboard-tile" on:click=move |_| ctx.navigate(Route::BillingHistory)>
                    "Billing History"
                </button>
                <button class="dashboard-tile" on:click=move |_| ctx.navigate(Route::PosAnalytics)>
                    "POS Analytics"
                </button>
            </div>
        </div>
    }
}

#[component]
fn CompanyAdminDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    // Tile per enabled module, with its seat allowance
    let enabled_modules = move || {
        session
            .entitlements
            .get()
            .iter()
            .filter(|e| e.enabled)
            .map(|e| (e.module, e.seats))
            .collect::<Vec<_>>()
    };

    let tile_target = |module: ModuleCode| match module {
        ModuleCode::Tasks => Some(Route::TasksList),
        ModuleCode::Pos => Some(Route::PosRegisters),
        _ => None,
    };

    view! {
        <div class="dashboard company-admin">
            <h1>"Company Dashboard"</h1>
            <div class="dashboard-tiles">
                <For
                    each=enabled_modules
                    key=|(m, _)| *m
                    children=move |(module, seats)| {
                        let target = tile_target(module);
                        view! {
                            <button
                                class="dashboard-tile"
                                disabled=target.is_none()
                                on:click=move |_| {
                                    if let Some(route) = target {
                                        ctx.navigate(route);
                                    }
                                }
                            >
                                <span class="tile-module">{module.label()}</span>
                                <span class="tile-seats">{format!("{} seats", seats)}</span>
                            </button>
                        }
                    }
                />
            </div>
            <div class="dashboard-actions">
                <button on:click=move |_| ctx.navigate(Route::PosAnalytics)>"Analytics"</button>
                <button on:click=move |_| ctx.navigate(Route::BillingHistory)>"Billing"</button>
            </div>
        </div>
    }
}

#[component]
fn StaffDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    view! {
        <div class="dashboard staff">
            <h1>"My Work"</h1>
            <div class="dashboard-tiles">
                <Show when=move || session.module_enabled(ModuleCode::Tasks)>
                    <button class="dashboard-tile" on:click=move |_| ctx.navigate(Route::TasksList)>
                        "My Tasks"
                    </button>
                </Show>
                <Show when=move || session.module_enabled(ModuleCode::Pos)>
                    <button class="dashboard-tile" on:click=move |_| ctx.navigate(Route::PosCheckout)>
                        "Checkout"
                    </button>
                </Show>
            </div>
        </div>
    }
}
