//! In-memory task store backing the board.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Tasks are kept in a `Vec` in insertion order with a side index from
/// identifier to position. Positions never shift because tasks are never
/// removed.
pub struct InMemoryTaskStore<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    positions: HashMap<TaskId, usize>,
}

impl InMemoryTaskState {
    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        let position = *self.positions.get(&id)?;
        self.tasks.get_mut(position)
    }
}

impl InMemoryTaskStore<DefaultClock> {
    /// Creates an empty store stamping status changes with the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskStore<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty store using the given clock for status changes.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryTaskState::default())),
            clock,
        }
    }

    fn read(&self) -> TaskStoreResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state
            .read()
            .map_err(|err| TaskStoreError::storage(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> TaskStoreResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state
            .write()
            .map_err(|err| TaskStoreError::storage(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl<C> TaskStore for InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    async fn insert(&self, task: &Task) -> TaskStoreResult<()> {
        let mut state = self.write()?;
        if state.positions.contains_key(&task.id()) {
            return Err(TaskStoreError::DuplicateTask(task.id()));
        }

        let position = state.tasks.len();
        state.positions.insert(task.id(), position);
        state.tasks.push(task.clone());
        Ok(())
    }

    async fn update_status(&self, id: TaskId, status: TaskStatus) -> TaskStoreResult<Task> {
        let mut state = self.write()?;
        let task = state.get_mut(id).ok_or(TaskStoreError::NotFound(id))?;
        task.set_status(status, &*self.clock);
        Ok(task.clone())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self.read()?;
        let task = state
            .positions
            .get(&id)
            .and_then(|position| state.tasks.get(*position))
            .cloned();
        Ok(task)
    }

    async fn tasks_by_status(&self, status: TaskStatus) -> TaskStoreResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state
            .tasks
            .iter()
            .filter(|task| task.status() == status)
            .cloned()
            .collect())
    }

    async fn all_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state.tasks.clone())
    }
}
