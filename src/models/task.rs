//! Task Models
//!
//! Task records and the lookup tables the board and forms render from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub status_id: u32,
    pub priority_id: Option<u32>,
    pub project_id: Option<u32>,
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub assignee_ids: Vec<u32>,
    #[serde(default)]
    pub percent_complete: u8,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub favorite: bool,
    pub parent_id: Option<u32>,
    pub position: i32,
}

/// Status lookup row; one kanban lane per status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStatus {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    pub position: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPriority {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    pub position: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskProject {
    pub id: u32,
    pub name: String,
}

/// Reusable task template; applying one creates tasks server-side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskTemplate {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub task_count: u32,
}

/// Currently running timer, if any (matches backend `/modules/tasks/timers/active`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveTimer {
    pub task_id: u32,
    pub task_title: String,
    pub elapsed_seconds: u64,
}
