//! POS Registers Page
//!
//! Register list with open/close session forms. Amounts are entered as text
//! and parsed to cents; the backend owns the session records.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::PosRegister;
use crate::money;
use crate::session::use_session;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PosRegistersPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let store = use_app_store();

    Effect::new(move |_| {
        let _ = ctx.pos_reload.get();
        spawn_local(async move {
            match api::pos::registers(session).await {
                Ok(loaded) => *store.registers().write() = loaded,
                Err(e) => ctx.toast_error(e.user_message()),
            }
        });
    });

    view! {
        <div class="registers-page">
            <h1>"Registers"</h1>
            <For
                each=move || store.registers().get()
                key=|r| (r.id, r.open_session_id)
                children=move |register| view! { <RegisterRow register=register /> }
            />
            {move || if store.registers().read().is_empty() {
                view! { <p class="empty-message">"No registers configured"</p> }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}
        </div>
    }
}

#[component]
fn RegisterRow(register: PosRegister) -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    let register_id = register.id;
    let open_session = register.open_session_id;
    let (amount, set_amount) = signal(String::new());
    let (amount_error, set_amount_error) = signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(cents) = money::parse_cents(&amount.get()) else {
            set_amount_error.set(Some("Enter an amount like 100.00".to_string()));
            return;
        };
        set_amount_error.set(None);

        spawn_local(async move {
            let result = match open_session {
                // Closing: the entered amount is the counted cash
                Some(session_id) => {
                    api::pos::close_register_session(session, session_id, cents).await
                }
                // Opening: the entered amount is the float
                None => api::pos::open_register(session, register_id, cents).await,
            };
            match result {
                Ok(_) => {
                    set_amount.set(String::new());
                    ctx.reload_pos();
                }
                Err(e) => ctx.toast_error(e.user_message()),
            }
        });
    };

    view! {
        <div class="register-row">
            <span class="register-name">{register.name.clone()}</span>
            <span class=move || if open_session.is_some() { "register-state open" } else { "register-state" }>
                {if open_session.is_some() { "Open" } else { "Closed" }}
            </span>

            <form class="register-session-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder=if open_session.is_some() { "Counted cash" } else { "Opening float" }
                    prop:value=move || amount.get()
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                />
                <button type="submit">
                    {if open_session.is_some() { "Close session" } else { "Open session" }}
                </button>
            </form>
            {move || amount_error.get().map(|msg| view! {
                <p class="form-error">{msg}</p>
            })}
        </div>
    }
}
