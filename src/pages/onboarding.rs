//! Onboarding Wizard Page
//!
//! Four-step first-run wizard. Step rules live in `crate::onboarding`; this
//! component only owns the signals and the submit call.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::ModuleCode;
use crate::onboarding::{can_advance, OnboardingDraft, WizardStep};
use crate::route::Route;
use crate::session::use_session;

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    let (step, set_step) = signal(WizardStep::Company);
    let (draft, set_draft) = signal(OnboardingDraft::default());
    let (invite_input, set_invite_input) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let next_enabled = move || can_advance(step.get(), &draft.get());

    let go_next = move |_| {
        if !next_enabled() {
            return;
        }
        if let Some(next) = step.get().next() {
            set_step.set(next);
        }
    };
    let go_back = move |_| {
        if let Some(prev) = step.get().prev() {
            set_step.set(prev);
        }
    };

    let toggle_module = move |module: ModuleCode| {
        set_draft.update(|d| {
            if let Some(idx) = d.modules.iter().position(|m| *m == module) {
                d.modules.remove(idx);
            } else {
                d.modules.push(module);
            }
        });
    };

    let add_invite = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = invite_input.get();
        if email.trim().is_empty() {
            return;
        }
        set_draft.update(|d| d.invites.push(email.trim().to_string()));
        set_invite_input.set(String::new());
    };

    let finish = move |_| {
        set_submitting.set(true);
        let payload = draft.get();
        spawn_local(async move {
            match api::onboarding::complete(session, &payload).await {
                Ok(()) => {
                    // Backend provisioned the selected modules; refresh gates
                    if let Ok(entitlements) = api::entitlements::list(session).await {
                        session.install_entitlements(entitlements);
                    }
                    ctx.toast_info("Welcome aboard!");
                    ctx.navigate(Route::Dashboard);
                }
                Err(e) => {
                    set_submitting.set(false);
                    ctx.toast_error(e.user_message());
                }
            }
        });
    };

    view! {
        <div class="onboarding-page">
            <div class="wizard-steps">
                {WizardStep::ORDER.iter().map(|s| {
                    let s = *s;
                    let step_class = move || {
                        if step.get() == s { "wizard-step active" } else { "wizard-step" }
                    };
                    view! { <span class=step_class>{s.label()}</span> }
                }).collect_view()}
            </div>

            {move || match step.get() {
                WizardStep::Company => view! {
                    <div class="wizard-body">
                        <h2>"Tell us about your company"</h2>
                        <input
                            type="text"
                            placeholder="Company name"
                            prop:value=move || draft.get().company_name
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_draft.update(|d| d.company_name = value);
                            }
                        />
                        <input
                            type="text"
                            placeholder="Industry"
                            prop:value=move || draft.get().industry
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                set_draft.update(|d| d.industry = value);
                            }
                        />
                    </div>
                }.into_any(),
                WizardStep::Modules => view! {
                    <div class="wizard-body">
                        <h2>"Pick your modules"</h2>
                        <div class="module-grid">
                            {ModuleCode::ALL.iter().map(|m| {
                                let m = *m;
                                let selected = move || draft.get().modules.contains(&m);
                                let card_class = move || {
                                    if selected() { "module-card selected" } else { "module-card" }
                                };
                                view! {
                                    <button class=card_class on:click=move |_| toggle_module(m)>
                                        {m.label()}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    </div>
                }.into_any(),
                WizardStep::Team => view! {
                    <div class="wizard-body">
                        <h2>"Invite your team"</h2>
                        <form on:submit=add_invite>
                            <input
                                type="email"
                                placeholder="teammate@company.com"
                                prop:value=move || invite_input.get()
                                on:input=move |ev| set_invite_input.set(event_target_value(&ev))
                            />
                            <button type="submit">"Add"</button>
                        </form>
                        <ul class="invite-list">
                            {move || draft.get().invites.iter().map(|email| {
                                view! { <li>{email.clone()}</li> }
                            }).collect_view()}
                        </ul>
                        <p class="wizard-hint">"You can skip this and invite people later."</p>
                    </div>
                }.into_any(),
                WizardStep::Review => view! {
                    <div class="wizard-body">
                        <h2>"Review"</h2>
                        <p>{move || format!("Company: {}", draft.get().company_name)}</p>
                        <p>{move || format!("Industry: {}", draft.get().industry)}</p>
                        <p>{move || {
                            let names: Vec<&str> = draft.get().modules.iter().map(|m| m.label()).collect();
                            format!("Modules: {}", names.join(", "))
                        }}</p>
                        <p>{move || format!("Invites: {}", draft.get().invites.len())}</p>
                    </div>
                }.into_any(),
            }}

            <div class="wizard-nav">
                <Show when=move || step.get().prev().is_some()>
                    <button on:click=go_back>"Back"</button>
                </Show>
                {move || if step.get() == WizardStep::Review {
                    view! {
                        <button class="wizard-finish" disabled=move || submitting.get() on:click=finish>
                            {move || if submitting.get() { "Finishing..." } else { "Finish" }}
                        </button>
                    }.into_any()
                } else {
                    view! {
                        <button class="wizard-next" disabled=move || !next_enabled() on:click=go_next>
                            "Next"
                        </button>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
