//! Tasks List Page
//!
//! Tasks grouped by due-date bucket, with pin/favorite toggles, timers, and
//! the create form. Board view is one click away.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, tasks::TaskPatch};
use crate::buckets::group_by_bucket;
use crate::components::{ConfirmButton, NewTaskForm};
use crate::context::use_app_context;
use crate::models::Task;
use crate::route::Route;
use crate::session::use_session;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TasksListPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let grouped = move || {
        let today = Utc::now().date_naive();
        group_by_bucket(&store.tasks().get(), today)
    };

    view! {
        <div class="tasks-page">
            <div class="tasks-header">
                <h1>"Tasks"</h1>
                <button class="view-switch" on:click=move |_| ctx.navigate(Route::TasksBoard)>
                    "Board view"
                </button>
                <button class="view-switch" on:click=move |_| ctx.navigate(Route::TaskTemplates)>
                    "Templates"
                </button>
            </div>

            <NewTaskForm />

            {move || grouped().into_iter().map(|(bucket, tasks)| {
                view! {
                    <div class="task-bucket">
                        <h2 class="bucket-label">{bucket.label()}</h2>
                        <For
                            each=move || tasks.clone()
                            key=|task| (task.id, task.pinned, task.favorite, task.percent_complete)
                            children=move |task| view! { <TaskRow task=task /> }
                        />
                    </div>
                }
            }).collect_view()}

            <p class="task-count">
                {move || format!("{} tasks", store.tasks().read().len())}
            </p>
        </div>
    }
}

#[component]
fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let store = use_app_store();

    let id = task.id;
    let pinned = task.pinned;
    let favorite = task.favorite;
    let is_subtask = task.parent_id.is_some();

    let priority_name = store
        .priorities()
        .read()
        .iter()
        .find(|p| Some(p.id) == task.priority_id)
        .map(|p| p.name.clone());

    let patch_task = move |patch: TaskPatch| {
        spawn_local(async move {
            match api::tasks::update(session, id, &patch).await {
                Ok(updated) => crate::store::store_update_task(&store, updated),
                Err(e) => ctx.toast_error(e.user_message()),
            }
        });
    };

    let toggle_pin = move |_| {
        patch_task(TaskPatch {
            pinned: Some(!pinned),
            ..Default::default()
        });
    };
    let toggle_favorite = move |_| {
        patch_task(TaskPatch {
            favorite: Some(!favorite),
            ..Default::default()
        });
    };

    let start_timer = move |_| {
        spawn_local(async move {
            if let Err(e) = api::tasks::start_timer(session, id).await {
                ctx.toast_error(e.user_message());
            }
        });
    };

    let delete_task = move |_| {
        spawn_local(async move {
            match api::tasks::delete(session, id).await {
                Ok(()) => crate::store::store_remove_task(&store, id),
                Err(e) => ctx.toast_error(e.user_message()),
            }
        });
    };

    view! {
        <div class=move || if is_subtask { "task-row subtask" } else { "task-row" }>
            <button
                class=move || if pinned { "pin-btn active" } else { "pin-btn" }
                title="Pin"
                on:click=toggle_pin
            >
                "📌"
            </button>
            <button
                class=move || if favorite { "favorite-btn active" } else { "favorite-btn" }
                title="Favorite"
                on:click=toggle_favorite
            >
                "★"
            </button>

            <span class="task-title">{task.title.clone()}</span>
            {priority_name.map(|name| view! { <span class="task-priority">{name}</span> })}
            {task.due_date.map(|due| view! {
                <span class="task-due">{due.format("%Y-%m-%d").to_string()}</span>
            })}
            <span class="task-progress">{format!("{}%", task.percent_complete)}</span>

            <button class="timer-btn" title="Start timer" on:click=start_timer>"▶"</button>
            <ConfirmButton
                label="×"
                button_class="delete-btn"
                on_confirm=Callback::new(move |_| delete_task(()))
            />
        </div>
    }
}
