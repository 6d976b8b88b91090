//! Module Gate Component
//!
//! Wraps a page in an entitlement check: content renders only when the
//! tenant has the module enabled.

use leptos::prelude::*;

use crate::models::ModuleCode;
use crate::session::use_session;

#[component]
pub fn ModuleGate(module: ModuleCode, children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        {move || if session.module_enabled(module) {
            children().into_any()
        } else {
            view! {
                <div class="module-locked">
                    <h2>{module.label()}</h2>
                    <p>"This module is not enabled for your company."</p>
                </div>
            }.into_any()
        }}
    }
}
