//! Applies interpreted drag outcomes to the task store.

use crate::task::{
    domain::{DragOutcome, Task},
    ports::{TaskStore, TaskStoreResult},
};
use std::sync::Arc;
use tracing::{debug, info};

/// Writes status changes to the store and ignores every other outcome.
#[derive(Debug)]
pub struct MutationApplier<S>
where
    S: TaskStore,
{
    store: Arc<S>,
}

impl<S> Clone for MutationApplier<S>
where
    S: TaskStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> MutationApplier<S>
where
    S: TaskStore,
{
    /// Creates an applier over the given store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Applies one outcome.
    ///
    /// Returns the updated task for a status change and `None` otherwise.
    ///
    /// # Errors
    ///
    /// Returns the store error when the status update is rejected; the
    /// store is left unchanged in that case.
    pub async fn apply(&self, outcome: DragOutcome) -> TaskStoreResult<Option<Task>> {
        match outcome {
            DragOutcome::StatusChange { task_id, from, to } => {
                let task = self.store.update_status(task_id, to).await?;
                info!(%task_id, %from, %to, "moved task to another column");
                Ok(Some(task))
            }
            DragOutcome::Reordered {
                task_id,
                bucket,
                from_index,
                to_index,
            } => {
                debug!(%task_id, %bucket, from_index, to_index, "ignoring reorder within column");
                Ok(None)
            }
            DragOutcome::Unchanged { task_id } => {
                debug!(%task_id, "task dropped at its original position");
                Ok(None)
            }
            DragOutcome::Cancelled => {
                debug!("drag released outside the board");
                Ok(None)
            }
        }
    }
}
