//! Domain model for the kanban board.
//!
//! Tasks, their status buckets, the column projection and the drag
//! gesture interpreter live here, free of storage and runtime concerns.

mod column;
mod drag;
mod error;
mod ids;
mod task;

pub use column::{Column, ColumnProjection};
pub use drag::{
    DragOutcome, DragResult, DropLocation, RawDragResult, RawDropLocation, interpret_drag,
    interpret_drag_at,
};
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use task::{Task, TaskDraft, TaskPriority, TaskStatus};
