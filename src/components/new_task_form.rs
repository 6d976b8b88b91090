//! New Task Form Component
//!
//! Form for creating tasks with priority and due-date fields.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, tasks::CreateTaskArgs};
use crate::context::use_app_context;
use crate::session::use_session;
use crate::store::{use_app_store, AppStateStoreFields};

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (priority_id, set_priority_id) = signal(None::<u32>);
    let (due_date, set_due_date) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get();
        if text.trim().is_empty() {
            return;
        }
        // Default status = first lane
        let Some(status_id) = store.statuses().read().first().map(|s| s.id) else {
            ctx.toast_error("Statuses are still loading");
            return;
        };
        let due: Option<NaiveDate> = due_date.get().parse().ok();
        let priority = priority_id.get();

        spawn_local(async move {
            let args = CreateTaskArgs {
                title: &text,
                status_id,
                priority_id: priority,
                project_id: None,
                due_date: due,
                parent_id: None,
            };
            match api::tasks::create(session, &args).await {
                Ok(_) => {
                    set_title.set(String::new());
                    set_due_date.set(String::new());
                    ctx.reload_tasks();
                }
                Err(e) => ctx.toast_error(e.user_message()),
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Add new task..."
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />

            <select on:change=move |ev| {
                let target = ev.target().unwrap();
                let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                set_priority_id.set(select.value().parse().ok());
            }>
                <option value="">"No priority"</option>
                <For
                    each=move || store.priorities().get()
                    key=|p| p.id
                    children=move |p| {
                        view! { <option value=p.id.to_string()>{p.name.clone()}</option> }
                    }
                />
            </select>

            <input
                type="date"
                prop:value=move || due_date.get()
                on:input=move |ev| set_due_date.set(event_target_value(&ev))
            />

            <button type="submit">"Add"</button>
        </form>
    }
}
