//! Task board: partitions a task list into the three fixed status columns.

use chrono::{NaiveDateTime, Utc};

use crate::models::{Task, TaskStatus};

/// Tasks grouped by status. Each column keeps the input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskBoard {
    pub todo: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub done: Vec<Task>,
}

impl TaskBoard {
    pub fn partition(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut board = Self::default();
        for task in tasks {
            board.column_mut(task.status).push(task);
        }
        board
    }

    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut Vec<Task> {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Done => &mut self.done,
        }
    }

    pub fn total(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Current time on the API's clock. Deadlines come back as naive UTC, and the
/// dashboard's overdue count is taken against UTC too.
pub fn server_now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// A task is overdue when its deadline has passed and it is not done.
pub fn is_overdue(task: &Task, now: NaiveDateTime) -> bool {
    task.status != TaskStatus::Done && task.deadline.is_some_and(|deadline| deadline < now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    fn task(id: i64, status: TaskStatus, deadline: Option<NaiveDateTime>) -> Task {
        Task {
            id,
            title: format!("task {id}"),
            description: None,
            status,
            project_id: 1,
            assigned_to: Some(9),
            deadline,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_partition_keeps_order() {
        let board = TaskBoard::partition(vec![
            task(1, TaskStatus::Done, None),
            task(2, TaskStatus::Todo, None),
            task(3, TaskStatus::InProgress, None),
            task(4, TaskStatus::Todo, None),
        ]);

        let ids = |status| -> Vec<i64> { board.column(status).iter().map(|t| t.id).collect() };
        assert_eq!(ids(TaskStatus::Todo), vec![2, 4]);
        assert_eq!(ids(TaskStatus::InProgress), vec![3]);
        assert_eq!(ids(TaskStatus::Done), vec![1]);
        assert_eq!(board.total(), 4);
    }

    #[test]
    fn test_empty_board() {
        let board = TaskBoard::partition(Vec::new());
        assert!(board.is_empty());
        assert!(board.column(TaskStatus::Done).is_empty());
    }

    #[test]
    fn test_overdue() {
        let now = at(10);
        assert!(is_overdue(&task(1, TaskStatus::Todo, Some(at(9))), now));
        assert!(is_overdue(&task(2, TaskStatus::InProgress, Some(at(1))), now));
        assert!(!is_overdue(&task(3, TaskStatus::Done, Some(at(1))), now));
        assert!(!is_overdue(&task(4, TaskStatus::Todo, Some(at(11))), now));
        assert!(!is_overdue(&task(5, TaskStatus::Todo, None), now));
    }

    #[test]
    fn test_overdue_against_utc_clock() {
        // Stored as naive UTC, like the API's `deadline` column.
        let utc_now = Utc::now().naive_utc();
        let just_missed = task(1, TaskStatus::Todo, Some(utc_now - Duration::minutes(30)));
        let due_soon = task(2, TaskStatus::Todo, Some(utc_now + Duration::minutes(30)));

        let now = server_now();
        assert!((now - utc_now).num_seconds().abs() < 5);
        assert!(is_overdue(&just_missed, now));
        assert!(!is_overdue(&due_soon, now));
    }
}
