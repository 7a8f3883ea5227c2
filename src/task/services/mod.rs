//! Application services for the kanban board.

mod applier;
mod board;
mod config;
mod creation;

pub use applier::MutationApplier;
pub use board::{BoardError, BoardResult, BoardService};
pub use config::BoardConfig;
pub use creation::{CreateTaskRequest, CreationFlow};
