//! Kitchen Display Page
//!
//! Pending kitchen orders with a mark-ready action. Refreshes on demand; the
//! active-timer widget is the app's one polling site, so this page stays
//! trigger-driven.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::Sale;
use crate::session::use_session;

#[component]
pub fn KitchenPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    let (orders, set_orders) = signal(Vec::<Sale>::new());

    Effect::new(move |_| {
        let _ = ctx.pos_reload.get();
        spawn_local(async move {
            match api::pos::kitchen_queue(session).await {
                Ok(loaded) => set_orders.set(loaded),
                Err(e) => ctx.toast_error(e.user_message()),
            }
        });
    });

    view! {
        <div class="kitchen-page">
            <div class="kitchen-header">
                <h1>"Kitchen"</h1>
                <button class="refresh-btn" on:click=move |_| ctx.reload_pos()>"Refresh"</button>
            </div>

            <div class="kitchen-orders">
                <For
                    each=move || orders.get()
                    key=|s| s.id
                    children=move |order| {
                        let id = order.id;
                        let mark_ready = move |_| {
                            spawn_local(async move {
                                match api::pos::mark_kitchen_ready(session, id).await {
                                    Ok(_) => ctx.reload_pos(),
                                    Err(e) => ctx.toast_error(e.user_message()),
                                }
                            });
                        };
                        view! {
                            <div class="kitchen-order">
                                <div class="kitchen-order-header">
                                    <span>{format!("Order #{}", order.id)}</span>
                                    <span>{order.created_at.format("%H:%M").to_string()}</span>
                                </div>
                                {order.lines.iter().map(|line| view! {
                                    <div class="kitchen-line">
                                        <span>{format!("{}x", line.qty)}</span>
                                        <span>{line.name.clone()}</span>
                                    </div>
                                }).collect_view()}
                                <button class="ready-btn" on:click=mark_ready>"Ready"</button>
                            </div>
                        }
                    }
                />
            </div>

            {move || if orders.get().is_empty() {
                view! { <p class="empty-message">"No pending orders"</p> }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}
        </div>
    }
}
