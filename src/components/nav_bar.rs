//! Nav Bar Component
//!
//! Branded top bar: module links gated by entitlement, role badge, logout.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::ModuleCode;
use crate::route::Route;
use crate::session::use_session;

/// Nav entries: label, target route, gating module (None = always shown)
const NAV_LINKS: &[(&str, Route, Option<ModuleCode>)] = &[
    ("Dashboard", Route::Dashboard, None),
    ("Tasks", Route::TasksList, Some(ModuleCode::Tasks)),
    ("Board", Route::TasksBoard, Some(ModuleCode::Tasks)),
    ("POS", Route::PosRegisters, Some(ModuleCode::Pos)),
    ("Checkout", Route::PosCheckout, Some(ModuleCode::Pos)),
    ("Kitchen", Route::Kitchen, Some(ModuleCode::Pos)),
    ("Billing", Route::BillingHistory, None),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    let company_name = move || {
        session
            .branding()
            .map(|b| b.company_name)
            .unwrap_or_else(|| "Opshub".to_string())
    };
    let accent_style = move || {
        session
            .branding()
            .and_then(|b| b.accent_color)
            .map(|c| format!("border-bottom-color: {};", c))
            .unwrap_or_default()
    };

    let logout = move |_| {
        session.clear();
        ctx.navigate(Route::Login);
    };

    view! {
        <nav class="nav-bar" style=accent_style>
            <span class="nav-brand">{company_name}</span>

            <div class="nav-links">
                {NAV_LINKS.iter().map(|(label, target, module)| {
                    let target = *target;
                    let module = *module;
                    let visible = move || module.map(|m| session.module_enabled(m)).unwrap_or(true);
                    let link_class = move || {
                        if ctx.route.get() == target { "nav-link active" } else { "nav-link" }
                    };
                    view! {
                        <Show when=visible>
                            <button class=link_class on:click=move |_| ctx.navigate(target)>
                                {*label}
                            </button>
                        </Show>
                    }
                }).collect_view()}
            </div>

            <div class="nav-session">
                <span class="nav-role-badge">{move || session.role.get().label()}</span>
                <span class="nav-email">
                    {move || session.user.get().map(|u| u.email).unwrap_or_default()}
                </span>
                <button class="nav-logout" on:click=logout>"Log out"</button>
            </div>
        </nav>
    }
}
