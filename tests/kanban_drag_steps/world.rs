//! Shared world state for kanban board BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{DragOutcome, Task, TaskId, TaskStatus},
    services::{BoardError, BoardService, CreationFlow},
};

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<InMemoryTaskStore, DefaultClock>;

/// Scenario world for kanban behaviour tests.
pub struct KanbanWorld {
    pub service: TestBoardService,
    pub task_ids: HashMap<String, TaskId>,
    pub form: CreationFlow,
    pub snapshot_before_gesture: Vec<Task>,
    pub last_gesture_result: Option<Result<DragOutcome, BoardError>>,
    pub last_submission: Option<Result<Task, BoardError>>,
}

impl KanbanWorld {
    /// Creates a world with an empty board.
    #[must_use]
    pub fn new() -> Self {
        let service = BoardService::new(
            Arc::new(InMemoryTaskStore::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            task_ids: HashMap::new(),
            form: CreationFlow::new(),
            snapshot_before_gesture: Vec::new(),
            last_gesture_result: None,
            last_submission: None,
        }
    }

    /// Returns the identifier of a task created under `title`.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.task_ids
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} in scenario world"))
    }
}

impl Default for KanbanWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> KanbanWorld {
    KanbanWorld::default()
}

/// Parses a bucket identifier used in feature files.
pub fn parse_status(raw: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
