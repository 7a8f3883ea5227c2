//! Read-side projection of the task set into the three board columns.

use super::{Task, TaskId, TaskStatus};

/// One bucket of the board: tasks sharing a status, in store order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<'a> {
    status: TaskStatus,
    tasks: Vec<&'a Task>,
}

impl<'a> Column<'a> {
    fn filtered(status: TaskStatus, tasks: &'a [Task]) -> Self {
        Self {
            status,
            tasks: tasks.iter().filter(|task| task.status() == status).collect(),
        }
    }

    /// Returns the bucket status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the column heading.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.status.column_title()
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[&'a Task] {
        &self.tasks
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the column has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the display index of a task, if it is in this column.
    #[must_use]
    pub fn position_of(&self, task_id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == task_id)
    }

    /// Returns the task identifiers in display order.
    #[must_use]
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(|task| task.id()).collect()
    }
}

/// The three columns derived from one snapshot of the task store.
///
/// Holds references into the snapshot and is rebuilt from scratch for
/// every render; it has no way to mutate tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnProjection<'a> {
    pending: Column<'a>,
    in_progress: Column<'a>,
    completed: Column<'a>,
}

impl<'a> ColumnProjection<'a> {
    /// Projects an insertion-ordered task snapshot into columns.
    #[must_use]
    pub fn from_tasks(tasks: &'a [Task]) -> Self {
        Self {
            pending: Column::filtered(TaskStatus::Pending, tasks),
            in_progress: Column::filtered(TaskStatus::InProgress, tasks),
            completed: Column::filtered(TaskStatus::Completed, tasks),
        }
    }

    /// Returns the column for a status.
    #[must_use]
    pub const fn column(&self, status: TaskStatus) -> &Column<'a> {
        match status {
            TaskStatus::Pending => &self.pending,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Completed => &self.completed,
        }
    }

    /// Returns all columns in board order.
    #[must_use]
    pub const fn columns(&self) -> [&Column<'a>; 3] {
        [&self.pending, &self.in_progress, &self.completed]
    }

    /// Returns the bucket currently holding a task.
    #[must_use]
    pub fn bucket_of(&self, task_id: TaskId) -> Option<TaskStatus> {
        self.columns()
            .into_iter()
            .find(|column| column.position_of(task_id).is_some())
            .map(Column::status)
    }

    /// Returns the number of tasks across all columns.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.columns().iter().map(|column| column.len()).sum()
    }
}
