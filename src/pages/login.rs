//! Login Page
//!
//! Email/password form; on success installs the session and pulls the
//! profile and entitlements before navigating on.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::route::Route;
use crate::session::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (form_error, set_form_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get();
        let password_value = password.get();

        // Inline validation, not a toast
        if email_value.trim().is_empty() || password_value.is_empty() {
            set_form_error.set(Some("Email and password are required".to_string()));
            return;
        }
        set_form_error.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            let result = async {
                let tokens = api::auth::login(session, &email_value, &password_value).await?;
                session.install_tokens(tokens);
                let profile = api::auth::me(session).await?;
                session.install_profile(profile);
                let entitlements = api::entitlements::list(session).await?;
                session.install_entitlements(entitlements);
                Ok::<_, api::ApiError>(())
            }
            .await;

            set_submitting.set(false);
            match result {
                Ok(()) => {
                    web_sys::console::log_1(&"[SESSION] login established".into());
                    // Fresh tenants with nothing enabled go through the wizard
                    if session.entitlements.get_untracked().iter().any(|e| e.enabled) {
                        ctx.navigate(Route::Dashboard);
                    } else {
                        ctx.navigate(Route::Onboarding);
                    }
                }
                Err(e) => {
                    session.clear();
                    set_form_error.set(Some(e.user_message()));
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <form class="login-form" on:submit=on_submit>
                <h1>"Sign in"</h1>

                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                {move || form_error.get().map(|msg| view! {
                    <p class="form-error">{msg}</p>
                })}

                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
