//! POS Refunds Page
//!
//! Returns form: look up a sale, pick line quantities, choose a payment
//! method. `build_refund_request` refuses an all-zero selection, so the form
//! issues exactly one refund request and only when something is selected.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::cart::build_refund_request;
use crate::context::use_app_context;
use crate::models::{PaymentMethod, Sale};
use crate::money;
use crate::session::use_session;

#[component]
pub fn PosRefundsPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    let (sale_id_input, set_sale_id_input) = signal(String::new());
    let (sale, set_sale) = signal(None::<Sale>);
    // Refund quantity per sale line index
    let (quantities, set_quantities) = signal(Vec::<(usize, u32)>::new());
    let (payment_method, set_payment_method) = signal(PaymentMethod::Cash);
    let (lookup_error, set_lookup_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let lookup = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Ok(id) = sale_id_input.get().trim().parse::<u32>() else {
            set_lookup_error.set(Some("Enter a sale number".to_string()));
            return;
        };
        set_lookup_error.set(None);

        spawn_local(async move {
            match api::pos::get_sale(session, id).await {
                Ok(found) => {
                    set_quantities.set((0..found.lines.len()).map(|i| (i, 0)).collect());
                    set_sale.set(Some(found));
                }
                Err(e) => {
                    set_sale.set(None);
                    set_lookup_error.set(Some(e.user_message()));
                }
            }
        });
    };

    let set_line_qty = move |idx: usize, qty: u32| {
        set_quantities.update(|qs| {
            if let Some(entry) = qs.iter_mut().find(|(i, _)| *i == idx) {
                entry.1 = qty;
            }
        });
    };

    let request = move || {
        sale.get()
            .and_then(|s| build_refund_request(&s, &quantities.get(), payment_method.get()))
    };

    let submit = move |_| {
        let Some(refund_request) = request() else {
            return;
        };
        set_submitting.set(true);
        spawn_local(async move {
            match api::pos::create_refund(session, &refund_request).await {
                Ok(refund) => {
                    ctx.toast_info(format!(
                        "Refunded {}",
                        money::format_cents(refund.total_cents)
                    ));
                    set_sale.set(None);
                    set_sale_id_input.set(String::new());
                    set_quantities.set(Vec::new());
                }
                Err(e) => ctx.toast_error(e.user_message()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="refunds-page">
            <h1>"Returns"</h1>

            <form class="sale-lookup" on:submit=lookup>
                <input
                    type="text"
                    placeholder="Sale #"
                    prop:value=move || sale_id_input.get()
                    on:input=move |ev| set_sale_id_input.set(event_target_value(&ev))
                />
                <button type="submit">"Find sale"</button>
            </form>
            {move || lookup_error.get().map(|msg| view! {
                <p class="form-error">{msg}</p>
            })}

            {move || sale.get().map(|found| {
                let lines = found.lines.clone();
                view! {
                    <div class="refund-form">
                        <h2>{format!("Sale #{} · {}", found.id, money::format_cents(found.total_cents))}</h2>

                        {lines.into_iter().enumerate().map(|(idx, line)| {
                            let sold_qty = line.qty;
                            view! {
                                <div class="refund-line">
                                    <span class="refund-line-name">{line.name.clone()}</span>
                                    <span class="refund-line-sold">
                                        {format!("{} @ {}", sold_qty, money::format_cents(line.unit_cents))}
                                    </span>
                                    <input
                                        type="number"
                                        min="0"
                                        max=sold_qty.to_string()
                                        prop:value=move || {
                                            quantities.get().iter()
                                                .find(|(i, _)| *i == idx)
                                                .map(|(_, q)| q.to_string())
                                                .unwrap_or_default()
                                        }
                                        on:input=move |ev| {
                                            let qty = event_target_value(&ev).parse().unwrap_or(0);
                                            set_line_qty(idx, qty);
                                        }
                                    />
                                </div>
                            }
                        }).collect_view()}

                        <div class="payment-methods">
                            {PaymentMethod::ALL.iter().map(|method| {
                                let method = *method;
                                let method_class = move || {
                                    if payment_method.get() == method {
                                        "payment-btn active"
                                    } else {
                                        "payment-btn"
                                    }
                                };
                                view! {
                                    <button class=method_class on:click=move |_| set_payment_method.set(method)>
                                        {method.label()}
                                    </button>
                                }
                            }).collect_view()}
                        </div>

                        <button
                            class="submit-refund"
                            disabled=move || request().is_none() || submitting.get()
                            on:click=submit
                        >
                            {move || if submitting.get() { "Refunding..." } else { "Refund selected" }}
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
