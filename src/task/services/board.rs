//! Service layer driving the kanban board: task creation, status updates
//! and drag gesture handling.

use super::{BoardConfig, CreateTaskRequest, MutationApplier};
use crate::task::{
    domain::{
        DragOutcome, DragResult, RawDragResult, Task, TaskDomainError, TaskId, TaskStatus,
        interpret_drag, interpret_drag_at,
    },
    ports::{TaskStore, TaskStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Caller input was rejected.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
    /// A task form was submitted without being opened.
    #[error("task form is not open")]
    FormClosed,
}

impl BoardError {
    /// Returns whether the error reports an unknown task.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(TaskStoreError::NotFound(_)))
    }

    /// Returns whether the error reports rejected caller input.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Domain(_) | Self::FormClosed)
    }
}

/// Result type for board service operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Kanban board orchestration service.
///
/// Gestures and creations pass through one gate, so each is decided and
/// applied against the store as it is when that request runs.
pub struct BoardService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    applier: MutationApplier<S>,
    clock: Arc<C>,
    config: BoardConfig,
    gate: Arc<Mutex<()>>,
}

impl<S, C> Clone for BoardService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            applier: self.applier.clone(),
            clock: Arc::clone(&self.clock),
            config: self.config,
            gate: Arc::clone(&self.gate),
        }
    }
}

impl<S, C> BoardService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a board service with default configuration.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_config(store, clock, BoardConfig::default())
    }

    /// Creates a board service with custom configuration.
    #[must_use]
    pub fn with_config(store: Arc<S>, clock: Arc<C>, config: BoardConfig) -> Self {
        Self {
            applier: MutationApplier::new(Arc::clone(&store)),
            store,
            clock,
            config,
            gate: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Creates a task in the given bucket.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Domain`] when the title is blank or a field
    /// exceeds the configured limits, and [`BoardError::Store`] when the
    /// store rejects the task. Nothing is stored on error.
    pub async fn add_task(
        &self,
        request: CreateTaskRequest,
        initial_status: TaskStatus,
    ) -> BoardResult<Task> {
        let draft = request.into_draft(&self.config)?;
        let _turn = self.gate.lock().await;
        let task = Task::new(draft, initial_status, &*self.clock);
        self.store.insert(&task).await?;
        info!(task_id = %task.id(), status = %initial_status, "created task");
        Ok(task)
    }

    /// Moves a task into the bucket for `status`.
    ///
    /// Repeating the current status is accepted and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] with [`TaskStoreError::NotFound`]
    /// when the task does not exist.
    pub async fn update_task_status(&self, id: TaskId, status: TaskStatus) -> BoardResult<Task> {
        let _turn = self.gate.lock().await;
        Ok(self.store.update_status(id, status).await?)
    }

    /// Returns the tasks of one bucket in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the store cannot be read.
    pub async fn tasks_by_status(&self, status: TaskStatus) -> BoardResult<Vec<Task>> {
        Ok(self.store.tasks_by_status(status).await?)
    }

    /// Returns every task in insertion order, ready for
    /// [`ColumnProjection::from_tasks`](crate::task::domain::ColumnProjection::from_tasks).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] when the store cannot be read.
    pub async fn snapshot(&self) -> BoardResult<Vec<Task>> {
        Ok(self.store.all_tasks().await?)
    }

    /// Handles the end of one drag gesture.
    ///
    /// A gesture released outside every bucket is returned as
    /// [`DragOutcome::Cancelled`] without consulting the store. Any other
    /// gesture must name a task that exists and is classified against the
    /// task's stored status, not the source bucket the gesture reports.
    /// Only a move between buckets writes to the store.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] with [`TaskStoreError::NotFound`] when
    /// the dragged task does not exist. The gesture is discarded and the
    /// store is left unchanged.
    pub async fn handle_drag_end(&self, result: &DragResult) -> BoardResult<DragOutcome> {
        let Some(task_id) = interpret_drag(result).task_id() else {
            debug!("drag released outside the board");
            return Ok(DragOutcome::Cancelled);
        };

        let _turn = self.gate.lock().await;
        let Some(current) = self.store.find_by_id(task_id).await? else {
            warn!(%task_id, "discarding drag of unknown task");
            return Err(TaskStoreError::NotFound(task_id).into());
        };
        if current.status() != result.source().bucket {
            debug!(
                %task_id,
                stored = %current.status(),
                reported = %result.source().bucket,
                "drag source differs from stored status"
            );
        }

        let outcome = interpret_drag_at(result, current.status());
        self.applier.apply(outcome).await?;
        Ok(outcome)
    }

    /// Handles a drag gesture reported with string identifiers.
    ///
    /// A gesture without a destination is cancelled before any identifier
    /// is parsed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Domain`] when a bucket or task identifier
    /// cannot be parsed, otherwise as [`Self::handle_drag_end`].
    pub async fn handle_raw_drag_end(&self, raw: &RawDragResult) -> BoardResult<DragOutcome> {
        if raw.destination.is_none() {
            debug!("drag released outside the board");
            return Ok(DragOutcome::Cancelled);
        }
        let result = DragResult::try_from(raw)?;
        self.handle_drag_end(&result).await
    }
}
