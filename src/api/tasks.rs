//! Task Module Endpoints
//!
//! CRUD, kanban moves, lookups, templates, and time tracking under
//! `/modules/tasks`.

use chrono::NaiveDate;
use serde::Serialize;

use super::{ApiResult, SessionContext};
use crate::models::{
    ActiveTimer, Task, TaskPriority, TaskProject, TaskStatus, TaskTemplate,
};

#[derive(Serialize)]
pub struct CreateTaskArgs<'a> {
    pub title: &'a str,
    pub status_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u32>,
}

#[derive(Serialize)]
struct MoveTaskArgs {
    status_id: u32,
}

#[derive(Serialize, Default)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_complete: Option<u8>,
}

pub async fn list(session: SessionContext) -> ApiResult<Vec<Task>> {
    super::get_json(session, "/modules/tasks/tasks").await
}

pub async fn create(session: SessionContext, args: &CreateTaskArgs<'_>) -> ApiResult<Task> {
    super::post_json(session, "/modules/tasks/tasks", args).await
}

pub async fn update(session: SessionContext, id: u32, patch: &TaskPatch) -> ApiResult<Task> {
    super::patch_json(session, &format!("/modules/tasks/tasks/{}", id), patch).await
}

pub async fn delete(session: SessionContext, id: u32) -> ApiResult<()> {
    super::delete(session, &format!("/modules/tasks/tasks/{}", id)).await
}

/// Reassign a task's status (kanban move)
pub async fn move_task(session: SessionContext, id: u32, status_id: u32) -> ApiResult<Task> {
    super::post_json(
        session,
        &format!("/modules/tasks/tasks/{}/move", id),
        &MoveTaskArgs { status_id },
    )
    .await
}

pub async fn statuses(session: SessionContext) -> ApiResult<Vec<TaskStatus>> {
    super::get_json(session, "/modules/tasks/statuses").await
}

pub async fn priorities(session: SessionContext) -> ApiResult<Vec<TaskPriority>> {
    super::get_json(session, "/modules/tasks/priorities").await
}

pub async fn projects(session: SessionContext) -> ApiResult<Vec<TaskProject>> {
    super::get_json(session, "/modules/tasks/projects").await
}

pub async fn templates(session: SessionContext) -> ApiResult<Vec<TaskTemplate>> {
    super::get_json(session, "/modules/tasks/templates").await
}

/// Apply a template; backend creates its tasks and returns them
pub async fn apply_template(session: SessionContext, id: u32) -> ApiResult<Vec<Task>> {
    super::post_json(
        session,
        &format!("/modules/tasks/templates/{}/apply", id),
        &serde_json::json!({}),
    )
    .await
}

pub async fn active_timer(session: SessionContext) -> ApiResult<Option<ActiveTimer>> {
    super::get_json(session, "/modules/tasks/timers/active").await
}

pub async fn start_timer(session: SessionContext, task_id: u32) -> ApiResult<ActiveTimer> {
    super::post_json(
        session,
        &format!("/modules/tasks/tasks/{}/timer/start", task_id),
        &serde_json::json!({}),
    )
    .await
}

pub async fn stop_timer(session: SessionContext, task_id: u32) -> ApiResult<()> {
    let _: serde_json::Value = super::post_json(
        session,
        &format!("/modules/tasks/tasks/{}/timer/stop", task_id),
        &serde_json::json!({}),
    )
    .await?;
    Ok(())
}
