//! Task Templates Page
//!
//! Lists reusable templates; applying one creates its tasks server-side.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::TaskTemplate;
use crate::route::Route;
use crate::session::use_session;

#[component]
pub fn TaskTemplatesPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();

    let (templates, set_templates) = signal(Vec::<TaskTemplate>::new());

    Effect::new(move |_| {
        let _ = ctx.tasks_reload.get();
        spawn_local(async move {
            match api::tasks::templates(session).await {
                Ok(loaded) => set_templates.set(loaded),
                Err(e) => ctx.toast_error(e.user_message()),
            }
        });
    });

    view! {
        <div class="templates-page">
            <div class="templates-header">
                <h1>"Task Templates"</h1>
                <button class="view-switch" on:click=move |_| ctx.navigate(Route::TasksList)>
                    "Back to tasks"
                </button>
            </div>

            <For
                each=move || templates.get()
                key=|t| t.id
                children=move |template| {
                    let id = template.id;
                    let apply = move |_| {
                        spawn_local(async move {
                            match api::tasks::apply_template(session, id).await {
                                Ok(created) => {
                                    ctx.toast_info(format!("Created {} tasks", created.len()));
                                    ctx.reload_tasks();
                                }
                                Err(e) => ctx.toast_error(e.user_message()),
                            }
                        });
                    };
                    view! {
                        <div class="template-row">
                            <span class="template-name">{template.name.clone()}</span>
                            <span class="template-count">{format!("{} tasks", template.task_count)}</span>
                            <button on:click=apply>"Apply"</button>
                        </div>
                    }
                }
            />

            {move || if templates.get().is_empty() {
                view! { <p class="empty-message">"No templates yet"</p> }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}
        </div>
    }
}
