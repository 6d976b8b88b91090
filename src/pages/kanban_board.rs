//! Kanban Board Page
//!
//! Status lanes with draggable cards. On drop, a move plan is computed; a
//! snapshot of the column cache is kept for rollback, the move request is
//! issued, and the cache is invalidated on success so the refetch
//! re-establishes ground truth. The cache is not reordered before the
//! request resolves.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{
    bind_global_mouseup, create_dnd_signals, make_on_card_mousedown, make_on_lane_mouseenter,
    make_on_lane_mouseleave, DropLane,
};

use crate::api;
use crate::context::use_app_context;
use crate::kanban::{plan_move, KanbanColumn};
use crate::models::Task;
use crate::route::Route;
use crate::session::use_session;
use crate::store::{store_restore_columns, use_app_store, AppStateStoreFields};

#[component]
pub fn KanbanBoardPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let store = use_app_store();

    let dnd = create_dnd_signals();

    bind_global_mouseup(dnd, move |dragged_id, DropLane(dest_status_id)| {
        let columns = store.columns().get_untracked();
        let Some(plan) = plan_move(dragged_id, dest_status_id, &columns) else {
            // Same lane or unknown card: no request
            return;
        };
        // Snapshot for rollback; the cache itself stays untouched until the
        // backend answers
        let snapshot = columns;
        web_sys::console::log_1(
            &format!(
                "[KANBAN] move task={} -> status={}",
                plan.task_id, plan.dest_status_id
            )
            .into(),
        );

        spawn_local(async move {
            match api::tasks::move_task(session, plan.task_id, plan.dest_status_id).await {
                Ok(_) => {
                    // Invalidate; refetch re-establishes ground truth
                    ctx.reload_tasks();
                }
                Err(e) => {
                    web_sys::console::log_1(
                        &format!("[KANBAN] move failed, restoring snapshot: {}", e).into(),
                    );
                    store_restore_columns(&store, snapshot);
                    ctx.toast_error(e.user_message());
                }
            }
        });
    });

    view! {
        <div class="kanban-page">
            <div class="kanban-header">
                <h1>"Board"</h1>
                <button class="view-switch" on:click=move |_| ctx.navigate(Route::TasksList)>
                    "List view"
                </button>
            </div>

            <div class="kanban-lanes">
                <For
                    each=move || store.columns().get()
                    key=|col| col.status_id
                    children=move |col| view! { <KanbanLane column=col dnd=dnd /> }
                />
            </div>
        </div>
    }
}

#[component]
fn KanbanLane(column: KanbanColumn, dnd: leptos_dragdrop::DndSignals) -> impl IntoView {
    let status_id = column.status_id;
    let on_mouseenter = make_on_lane_mouseenter(dnd, status_id);
    let on_mouseleave = make_on_lane_mouseleave(dnd);

    let is_drop_target = move || {
        matches!(dnd.drop_lane_read.get(), Some(DropLane(id)) if id == status_id)
    };
    let lane_class = move || {
        if is_drop_target() {
            "kanban-lane drop-target"
        } else {
            "kanban-lane"
        }
    };
    let header_style = column
        .color
        .clone()
        .map(|c| format!("border-top-color: {};", c))
        .unwrap_or_default();
    let count = column.tasks.len();

    view! {
        <div class=lane_class on:mouseenter=on_mouseenter on:mouseleave=on_mouseleave>
            <div class="lane-header" style=header_style>
                <span class="lane-name">{column.name.clone()}</span>
                <span class="lane-count">{count}</span>
            </div>
            <div class="lane-cards">
                <For
                    each=move || column.tasks.clone()
                    key=|task| (task.id, task.percent_complete)
                    children=move |task| view! { <KanbanCard task=task dnd=dnd /> }
                />
            </div>
        </div>
    }
}

#[component]
fn KanbanCard(task: Task, dnd: leptos_dragdrop::DndSignals) -> impl IntoView {
    let id = task.id;
    let on_mousedown = make_on_card_mousedown(dnd, id);

    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);
    let card_class = move || {
        if is_dragging() {
            "kanban-card dragging"
        } else {
            "kanban-card"
        }
    };

    view! {
        <div class=card_class on:mousedown=on_mousedown>
            <span class="card-title">{task.title.clone()}</span>
            {task.due_date.map(|due| view! {
                <span class="card-due">{due.format("%m-%d").to_string()}</span>
            })}
            <Show when=move || { task.percent_complete > 0 }>
                <span class="card-progress">{format!("{}%", task.percent_complete)}</span>
            </Show>
        </div>
    }
}
