//! Kanban Board Logic
//!
//! Builds the status-column mapping the board renders from and decides when a
//! drop actually needs a move request. The cache itself lives in the store;
//! callers snapshot it before a move and restore it on failure.

use crate::models::{Task, TaskStatus};

/// One board lane: a status and its ordered tasks
#[derive(Clone, Debug, PartialEq)]
pub struct KanbanColumn {
    pub status_id: u32,
    pub name: String,
    pub color: Option<String>,
    pub tasks: Vec<Task>,
}

/// A move the backend should be asked to perform
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovePlan {
    pub task_id: u32,
    pub dest_status_id: u32,
}

/// Build columns from the status lookup and the task cache.
///
/// Every status gets a lane even when empty; tasks with an unknown status are
/// dropped (the backend owns the status list, a refetch heals the gap).
pub fn build_columns(statuses: &[TaskStatus], tasks: &[Task]) -> Vec<KanbanColumn> {
    let mut ordered: Vec<&TaskStatus> = statuses.iter().collect();
    ordered.sort_by_key(|s| s.position);

    ordered
        .into_iter()
        .map(|status| {
            let mut lane_tasks: Vec<Task> = tasks
                .iter()
                .filter(|t| t.status_id == status.id)
                .cloned()
                .collect();
            lane_tasks.sort_by_key(|t| (t.position, t.id));
            KanbanColumn {
                status_id: status.id,
                name: status.name.clone(),
                color: status.color.clone(),
                tasks: lane_tasks,
            }
        })
        .collect()
}

/// Decide whether a drop needs a request.
///
/// Returns None when the task already sits in the destination lane (same-column
/// drop is a no-op) or when the task is not on the board at all.
pub fn plan_move(task_id: u32, dest_status_id: u32, columns: &[KanbanColumn]) -> Option<MovePlan> {
    let source = columns
        .iter()
        .find(|col| col.tasks.iter().any(|t| t.id == task_id))?;
    if source.status_id == dest_status_id {
        return None;
    }
    Some(MovePlan {
        task_id,
        dest_status_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_status(id: u32, position: i32) -> TaskStatus {
        TaskStatus {
            id,
            name: format!("Status {}", id),
            color: None,
            position,
        }
    }

    fn make_task(id: u32, status_id: u32, position: i32) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            status_id,
            priority_id: None,
            project_id: None,
            due_date: None,
            assignee_ids: Vec::new(),
            percent_complete: 0,
            pinned: false,
            favorite: false,
            parent_id: None,
            position,
        }
    }

    #[test]
    fn test_build_columns_orders_lanes_and_tasks() {
        let statuses = vec![make_status(2, 1), make_status(1, 0)];
        let tasks = vec![make_task(10, 1, 1), make_task(11, 1, 0), make_task(12, 2, 0)];

        let columns = build_columns(&statuses, &tasks);

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].status_id, 1);
        let first_lane: Vec<u32> = columns[0].tasks.iter().map(|t| t.id).collect();
        assert_eq!(first_lane, vec![11, 10]);
        assert_eq!(columns[1].tasks.len(), 1);
    }

    #[test]
    fn test_build_columns_keeps_empty_lanes() {
        let statuses = vec![make_status(1, 0), make_status(2, 1)];
        let columns = build_columns(&statuses, &[make_task(10, 1, 0)]);
        assert_eq!(columns[1].tasks.len(), 0);
    }

    #[test]
    fn test_plan_move_cross_column() {
        let statuses = vec![make_status(1, 0), make_status(2, 1)];
        let columns = build_columns(&statuses, &[make_task(10, 1, 0)]);

        let plan = plan_move(10, 2, &columns);
        assert_eq!(
            plan,
            Some(MovePlan {
                task_id: 10,
                dest_status_id: 2
            })
        );
    }

    #[test]
    fn test_plan_move_same_column_is_noop() {
        let statuses = vec![make_status(1, 0), make_status(2, 1)];
        let columns = build_columns(&statuses, &[make_task(10, 1, 0)]);

        assert_eq!(plan_move(10, 1, &columns), None);
    }

    #[test]
    fn test_plan_move_unknown_task() {
        let statuses = vec![make_status(1, 0)];
        let columns = build_columns(&statuses, &[]);

        assert_eq!(plan_move(99, 1, &columns), None);
    }
}
