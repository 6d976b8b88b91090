//! POS Checkout Page
//!
//! Product catalog and cart. Cart math lives in `crate::cart`; the backend
//! recomputes every total on submit. The total area renders formatted cents.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::cart::{add_to_cart, build_sale_request, cart_total_cents, remove_from_cart, CartLine};
use crate::context::use_app_context;
use crate::models::{PaymentMethod, Sale};
use crate::money;
use crate::session::use_session;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PosCheckoutPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let store = use_app_store();

    let (cart, set_cart) = signal(Vec::<CartLine>::new());
    let (payment_method, set_payment_method) = signal(PaymentMethod::Cash);
    let (session_id_input, set_session_id_input) = signal(String::new());
    let (search, set_search) = signal(String::new());
    let (last_sale, set_last_sale) = signal(None::<Sale>);
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.pos_reload.get();
        let term = search.get();
        spawn_local(async move {
            match api::pos::products(session, Some(&term)).await {
                Ok(loaded) => *store.products().write() = loaded,
                Err(e) => ctx.toast_error(e.user_message()),
            }
        });
    });

    let total = move || cart_total_cents(&cart.get());

    let submit_sale = move |_| {
        let Ok(register_session_id) = session_id_input.get().trim().parse::<u32>() else {
            ctx.toast_error("Enter the open register session number");
            return;
        };
        let Some(request) = build_sale_request(register_session_id, &cart.get(), payment_method.get())
        else {
            return;
        };
        set_submitting.set(true);

        spawn_local(async move {
            match api::pos::create_sale(session, &request).await {
                Ok(sale) => {
                    set_cart.set(Vec::new());
                    set_last_sale.set(Some(sale));
                    ctx.toast_info("Sale recorded");
                }
                Err(e) => ctx.toast_error(e.user_message()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="checkout-page">
            <div class="catalog-pane">
                <h1>"Checkout"</h1>
                <input
                    type="text"
                    class="product-search"
                    placeholder="Search products..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <div class="product-grid">
                    <For
                        each=move || store.products().get()
                        key=|p| p.id
                        children=move |product| {
                            let label = format!(
                                "{} · {}",
                                product.name,
                                money::format_cents(product.price_cents)
                            );
                            view! {
                                <button
                                    class="product-card"
                                    on:click=move |_| set_cart.update(|c| add_to_cart(c, &product))
                                >
                                    {label}
                                </button>
                            }
                        }
                    />
                </div>
            </div>

            <div class="cart-pane">
                <h2>"Cart"</h2>
                <For
                    each=move || cart.get()
                    key=|line| (line.product_id, line.qty)
                    children=move |line| {
                        let product_id = line.product_id;
                        view! {
                            <div class="cart-line">
                                <span class="cart-line-name">{line.name.clone()}</span>
                                <span class="cart-line-qty">{format!("x{}", line.qty)}</span>
                                <span class="cart-line-total">
                                    {money::format_cents(line.line_total_cents())}
                                </span>
                                <button on:click=move |_| {
                                    set_cart.update(|c| remove_from_cart(c, product_id))
                                }>
                                    "−"
                                </button>
                            </div>
                        }
                    }
                />

                <div class="cart-total">
                    <span>"Total"</span>
                    <span class="cart-total-amount">{move || money::format_cents(total())}</span>
                </div>

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

                <input
                    type="text"
                    placeholder="Register session #"
                    prop:value=move || session_id_input.get()
                    on:input=move |ev| set_session_id_input.set(event_target_value(&ev))
                />

                <button
                    class="submit-sale"
                    disabled=move || cart.get().is_empty() || submitting.get()
                    on:click=submit_sale
                >
                    {move || if submitting.get() { "Charging..." } else { "Charge" }}
                </button>

                {move || last_sale.get().map(|sale| view! {
                    <div class="last-sale">
                        <span>{format!("Sale #{} recorded", sale.id)}</span>
                        <span>{money::format_cents(sale.total_cents)}</span>
                    </div>
                })}
            </div>
        </div>
    }
}
