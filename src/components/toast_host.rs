//! Toast Host Component
//!
//! Renders the transient notification queue; each toast dismisses itself
//! after a few seconds or on click.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, ToastKind};

const TOAST_MS: u32 = 4000;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toast-host">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    // Auto-dismiss
                    spawn_local(async move {
                        TimeoutFuture::new(TOAST_MS).await;
                        ctx.dismiss_toast(id);
                    });

                    let kind_class = match toast.kind {
                        ToastKind::Info => "toast info",
                        ToastKind::Error => "toast error",
                    };
                    view! {
                        <div class=kind_class on:click=move |_| ctx.dismiss_toast(id)>
                            {toast.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
