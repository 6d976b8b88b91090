//! POS Analytics Page
//!
//! Owner-gated summary tiles. Staff see a notice instead of numbers.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::PosAnalyticsSummary;
use crate::money;
use crate::session::use_session;

#[component]
pub fn PosAnalyticsPage() -> impl IntoView {
    let session = use_session();

    view! {
        {move || if session.role.get().is_owner() {
            view! { <AnalyticsSummaryView /> }.into_any()
        } else {
            view! {
                <div class="analytics-page">
                    <h1>"Analytics"</h1>
                    <p>"Only company admins can see analytics."</p>
                </div>
            }.into_any()
        }}
    }
}

#[component]
fn AnalyticsSummaryView() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let (summary, set_summary) = signal(None::<PosAnalyticsSummary>);

    Effect::new(move |_| {
        let _ = ctx.pos_reload.get();
        spawn_local(async move {
            match api::pos::analytics_summary(session).await {
                Ok(loaded) => set_summary.set(Some(loaded)),
                Err(e) => ctx.toast_error(e.user_message()),
            }
        });
    });

    view! {
        <div class="analytics-page">
            <h1>"Analytics"</h1>
            {move || match summary.get() {
                Some(s) => view! {
                    <div class="analytics-tiles">
                        <div class="analytics-tile">
                            <span class="tile-label">"Sales today"</span>
                            <span class="tile-value">{money::format_cents(s.sales_today_cents)}</span>
                        </div>
                        <div class="analytics-tile">
                            <span class="tile-label">"Sales this week"</span>
                            <span class="tile-value">{money::format_cents(s.sales_week_cents)}</span>
                        </div>
                        <div class="analytics-tile">
                            <span class="tile-label">"Transactions today"</span>
                            <span class="tile-value">{s.sale_count_today}</span>
                        </div>
                        <div class="analytics-tile">
                            <span class="tile-label">"Refunds today"</span>
                            <span class="tile-value">{s.refund_count_today}</span>
                        </div>
                    </div>
                }.into_any(),
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
            }}
        </div>
    }
}
