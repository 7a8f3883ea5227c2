//! Task creation requests and the short-lived task form.

use super::{BoardConfig, BoardError, BoardResult, BoardService};
use crate::task::{
    domain::{Task, TaskDomainError, TaskDraft, TaskPriority, TaskStatus},
    ports::TaskStore,
};
use chrono::NaiveDate;
use mockable::Clock;

/// Field values submitted from the task form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    priority: TaskPriority,
    due_date: Option<NaiveDate>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            priority: TaskPriority::default(),
            due_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Validates the request into a draft.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] for a blank title and
    /// [`TaskDomainError::TitleTooLong`] or
    /// [`TaskDomainError::DescriptionTooLong`] when a limit is exceeded.
    pub fn into_draft(self, config: &BoardConfig) -> Result<TaskDraft, TaskDomainError> {
        let mut draft = TaskDraft::new(self.title)?
            .with_description(self.description)
            .with_priority(self.priority);
        if let Some(due_date) = self.due_date {
            draft = draft.with_due_date(due_date);
        }

        let title_length = draft.title().chars().count();
        if title_length > config.max_title_length {
            return Err(TaskDomainError::TitleTooLong {
                length: title_length,
                max: config.max_title_length,
            });
        }
        let description_length = draft.description().chars().count();
        if description_length > config.max_description_length {
            return Err(TaskDomainError::DescriptionTooLong {
                length: description_length,
                max: config.max_description_length,
            });
        }
        Ok(draft)
    }
}

/// The task form opened from a column's "add" button.
///
/// Remembers which bucket the form was opened for. A rejected submission
/// keeps the form open so the caller can correct it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreationFlow {
    target: Option<TaskStatus>,
}

impl CreationFlow {
    /// Creates a closed form.
    #[must_use]
    pub const fn new() -> Self {
        Self { target: None }
    }

    /// Opens the form for the given bucket, replacing any earlier target.
    pub const fn open(&mut self, status: TaskStatus) {
        self.target = Some(status);
    }

    /// Closes the form without creating anything.
    pub const fn cancel(&mut self) {
        self.target = None;
    }

    /// Returns whether the form is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.target.is_some()
    }

    /// Returns the bucket new tasks will be placed in, if open.
    #[must_use]
    pub const fn target(&self) -> Option<TaskStatus> {
        self.target
    }

    /// Submits the form.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::FormClosed`] when the form is not open, or the
    /// error from [`BoardService::add_task`]. The form stays open on error.
    pub async fn submit<S, C>(
        &mut self,
        service: &BoardService<S, C>,
        request: CreateTaskRequest,
    ) -> BoardResult<Task>
    where
        S: TaskStore,
        C: Clock + Send + Sync,
    {
        let status = self.target.ok_or(BoardError::FormClosed)?;
        let task = service.add_task(request, status).await?;
        self.target = None;
        Ok(task)
    }
}
