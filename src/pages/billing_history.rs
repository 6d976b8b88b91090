//! Billing History Page
//!
//! Read-only list of billing events. Webhook processing happens entirely in
//! the backend; this page just reads the trail it leaves.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::BillingEvent;
use crate::money;
use crate::session::use_session;

#[component]
pub fn BillingHistoryPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    let (events, set_events) = signal(Vec::<BillingEvent>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::billing::history(session).await {
                Ok(loaded) => set_events.set(loaded),
                Err(e) => ctx.toast_error(e.user_message()),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="billing-page">
            <h1>"Billing History"</h1>

            <For
                each=move || events.get()
                key=|e| e.id
                children=move |event| {
                    view! {
                        <div class="billing-row">
                            <span class="billing-date">
                                {event.occurred_at.format("%Y-%m-%d").to_string()}
                            </span>
                            <span class="billing-description">{event.description.clone()}</span>
                            <span class="billing-amount">{money::format_cents(event.amount_cents)}</span>
                            <span class="billing-status">{event.status.clone()}</span>
                        </div>
                    }
                }
            />

            {move || if !loading.get() && events.get().is_empty() {
                view! { <p class="empty-message">"No billing activity"</p> }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}
        </div>
    }
}
