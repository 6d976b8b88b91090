//! POS Receipts Page
//!
//! Recent sales with a per-sale receipt view. Receipts arrive pre-rendered
//! from the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::{Receipt, Sale};
use crate::money;
use crate::session::use_session;

#[component]
pub fn PosReceiptsPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    let (sales, set_sales) = signal(Vec::<Sale>::new());
    let (receipt, set_receipt) = signal(None::<Receipt>);

    Effect::new(move |_| {
        let _ = ctx.pos_reload.get();
        spawn_local(async move {
            match api::pos::recent_sales(session).await {
                Ok(loaded) => set_sales.set(loaded),
                Err(e) => ctx.toast_error(e.user_message()),
            }
        });
    });

    view! {
        <div class="receipts-page">
            <div class="sales-pane">
                <h1>"Receipts"</h1>
                <For
                    each=move || sales.get()
                    key=|s| s.id
                    children=move |sale| {
                        let id = sale.id;
                        let open_receipt = move |_| {
                            spawn_local(async move {
                                match api::pos::receipt(session, id).await {
                                    Ok(loaded) => set_receipt.set(Some(loaded)),
                                    Err(e) => ctx.toast_error(e.user_message()),
                                }
                            });
                        };
                        view! {
                            <div class="sale-row" on:click=open_receipt>
                                <span>{format!("Sale #{}", sale.id)}</span>
                                <span>{sale.created_at.format("%Y-%m-%d %H:%M").to_string()}</span>
                                <span>{money::format_cents(sale.total_cents)}</span>
                            </div>
                        }
                    }
                />
            </div>

            <div class="receipt-pane">
                {move || receipt.get().map(|r| view! {
                    <div class="receipt">
                        <pre class="receipt-header">{r.header.clone()}</pre>
                        {r.lines.iter().map(|line| view! {
                            <pre class="receipt-line">{line.clone()}</pre>
                        }).collect_view()}
                        <pre class="receipt-total">{money::format_cents(r.total_cents)}</pre>
                    </div>
                })}
            </div>
        </div>
    }
}
