//! Due-Date Buckets
//!
//! Groups tasks into display buckets for the list view. Pinned tasks float to
//! the front of their bucket; order within a bucket otherwise follows the
//! backend-assigned position.

use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

use crate::models::Task;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DueBucket {
    Overdue,
    Today,
    Tomorrow,
    ThisWeek,
    Later,
    NoDueDate,
}

impl DueBucket {
    pub fn label(&self) -> &'static str {
        match self {
            DueBucket::Overdue => "Overdue",
            DueBucket::Today => "Today",
            DueBucket::Tomorrow => "Tomorrow",
            DueBucket::ThisWeek => "This Week",
            DueBucket::Later => "Later",
            DueBucket::NoDueDate => "No Due Date",
        }
    }
}

/// Bucket for a single due date relative to `today`
pub fn bucket_for(due: Option<NaiveDate>, today: NaiveDate) -> DueBucket {
    let Some(due) = due else {
        return DueBucket::NoDueDate;
    };
    if due < today {
        DueBucket::Overdue
    } else if due == today {
        DueBucket::Today
    } else if due == today + Duration::days(1) {
        DueBucket::Tomorrow
    } else if due <= today + Duration::days(7) {
        DueBucket::ThisWeek
    } else {
        DueBucket::Later
    }
}

/// Group tasks into buckets in display order; empty buckets are omitted
pub fn group_by_bucket(tasks: &[Task], today: NaiveDate) -> Vec<(DueBucket, Vec<Task>)> {
    let mut grouped: BTreeMap<DueBucket, Vec<Task>> = BTreeMap::new();
    for task in tasks {
        grouped
            .entry(bucket_for(task.due_date, today))
            .or_default()
            .push(task.clone());
    }
    for bucket_tasks in grouped.values_mut() {
        bucket_tasks.sort_by_key(|t| (!t.pinned, t.position, t.id));
    }
    grouped.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, due: Option<&str>, pinned: bool, position: i32) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            status_id: 1,
            priority_id: None,
            project_id: None,
            due_date: due.map(|d| d.parse().unwrap()),
            assignee_ids: Vec::new(),
            percent_complete: 0,
            pinned,
            favorite: false,
            parent_id: None,
            position,
        }
    }

    fn today() -> NaiveDate {
        "2026-08-06".parse().unwrap()
    }

    #[test]
    fn test_bucket_for() {
        assert_eq!(bucket_for(None, today()), DueBucket::NoDueDate);
        assert_eq!(bucket_for("2026-08-01".parse().ok(), today()), DueBucket::Overdue);
        assert_eq!(bucket_for("2026-08-06".parse().ok(), today()), DueBucket::Today);
        assert_eq!(bucket_for("2026-08-07".parse().ok(), today()), DueBucket::Tomorrow);
        assert_eq!(bucket_for("2026-08-13".parse().ok(), today()), DueBucket::ThisWeek);
        assert_eq!(bucket_for("2026-08-14".parse().ok(), today()), DueBucket::Later);
    }

    #[test]
    fn test_group_by_bucket_order() {
        let tasks = vec![
            make_task(1, Some("2026-09-01"), false, 0),
            make_task(2, Some("2026-08-06"), false, 0),
            make_task(3, None, false, 0),
            make_task(4, Some("2026-08-01"), false, 0),
        ];
        let grouped = group_by_bucket(&tasks, today());
        let buckets: Vec<DueBucket> = grouped.iter().map(|(b, _)| *b).collect();
        assert_eq!(
            buckets,
            vec![DueBucket::Overdue, DueBucket::Today, DueBucket::Later, DueBucket::NoDueDate]
        );
    }

    #[test]
    fn test_pinned_floats_first_within_bucket() {
        let tasks = vec![
            make_task(1, Some("2026-08-06"), false, 0),
            make_task(2, Some("2026-08-06"), true, 5),
            make_task(3, Some("2026-08-06"), false, 2),
        ];
        let grouped = group_by_bucket(&tasks, today());
        let ids: Vec<u32> = grouped[0].1.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
