//! Drag-and-drop gesture values and the pure decision function that
//! classifies them.

use super::{TaskDomainError, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};

/// A position inside one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DropLocation {
    /// Bucket the position belongs to.
    pub bucket: TaskStatus,
    /// Zero-based index within the bucket.
    pub index: usize,
}

impl DropLocation {
    /// Creates a location.
    #[must_use]
    pub const fn new(bucket: TaskStatus, index: usize) -> Self {
        Self { bucket, index }
    }
}

/// The result of one completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragResult {
    task_id: TaskId,
    source: DropLocation,
    destination: Option<DropLocation>,
}

impl DragResult {
    /// Creates a gesture that was released over a bucket.
    #[must_use]
    pub const fn dropped(task_id: TaskId, source: DropLocation, destination: DropLocation) -> Self {
        Self {
            task_id,
            source,
            destination: Some(destination),
        }
    }

    /// Creates a gesture that was released outside every bucket.
    #[must_use]
    pub const fn released_outside(task_id: TaskId, source: DropLocation) -> Self {
        Self {
            task_id,
            source,
            destination: None,
        }
    }

    /// Returns the identifier of the dragged task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns where the drag started.
    #[must_use]
    pub const fn source(&self) -> DropLocation {
        self.source
    }

    /// Returns where the drag ended, if over a bucket.
    #[must_use]
    pub const fn destination(&self) -> Option<DropLocation> {
        self.destination
    }
}

/// Drop position as reported by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDropLocation {
    /// Bucket identifier, e.g. `"in_progress"`.
    pub droppable_id: String,
    /// Zero-based index within the bucket.
    pub index: usize,
}

/// Gesture result as reported by the rendering layer, with string ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDragResult {
    /// String form of the dragged task's identifier.
    pub draggable_id: String,
    /// Where the drag started.
    pub source: RawDropLocation,
    /// Where the drag ended; absent when released outside every bucket.
    #[serde(default)]
    pub destination: Option<RawDropLocation>,
}

impl TryFrom<&RawDropLocation> for DropLocation {
    type Error = TaskDomainError;

    fn try_from(raw: &RawDropLocation) -> Result<Self, Self::Error> {
        let bucket = TaskStatus::try_from(raw.droppable_id.as_str())?;
        Ok(Self::new(bucket, raw.index))
    }
}

impl TryFrom<&RawDragResult> for DragResult {
    type Error = TaskDomainError;

    fn try_from(raw: &RawDragResult) -> Result<Self, Self::Error> {
        let task_id: TaskId = raw.draggable_id.parse()?;
        let source = DropLocation::try_from(&raw.source)?;
        let destination = raw
            .destination
            .as_ref()
            .map(DropLocation::try_from)
            .transpose()?;
        Ok(Self {
            task_id,
            source,
            destination,
        })
    }
}

/// Classification of one gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Released outside every bucket.
    Cancelled,
    /// Dropped back onto the position it started from.
    Unchanged {
        /// Dragged task.
        task_id: TaskId,
    },
    /// Moved within its own bucket. Buckets keep insertion order, so this
    /// has no durable effect.
    Reordered {
        /// Dragged task.
        task_id: TaskId,
        /// Bucket the task stayed in.
        bucket: TaskStatus,
        /// Index the drag started from.
        from_index: usize,
        /// Index the task was dropped at.
        to_index: usize,
    },
    /// Dropped into a different bucket.
    StatusChange {
        /// Dragged task.
        task_id: TaskId,
        /// Bucket the drag started in.
        from: TaskStatus,
        /// Bucket the task now belongs to.
        to: TaskStatus,
    },
}

impl DragOutcome {
    /// Returns whether applying this outcome writes to the task store.
    #[must_use]
    pub const fn mutates_store(&self) -> bool {
        matches!(self, Self::StatusChange { .. })
    }

    /// Returns the dragged task, or `None` for a cancelled gesture.
    #[must_use]
    pub const fn task_id(&self) -> Option<TaskId> {
        match self {
            Self::Cancelled => None,
            Self::Unchanged { task_id }
            | Self::Reordered { task_id, .. }
            | Self::StatusChange { task_id, .. } => Some(*task_id),
        }
    }
}

/// Classifies a gesture without touching any task state.
#[must_use]
pub const fn interpret_drag(result: &DragResult) -> DragOutcome {
    let task_id = result.task_id;
    let source = result.source;
    let Some(destination) = result.destination else {
        return DragOutcome::Cancelled;
    };

    if !same_bucket(source.bucket, destination.bucket) {
        return DragOutcome::StatusChange {
            task_id,
            from: source.bucket,
            to: destination.bucket,
        };
    }

    if source.index == destination.index {
        DragOutcome::Unchanged { task_id }
    } else {
        DragOutcome::Reordered {
            task_id,
            bucket: source.bucket,
            from_index: source.index,
            to_index: destination.index,
        }
    }
}

/// Classifies a gesture against the status the task has in the store.
///
/// When the reported source bucket still matches `stored`, this is
/// [`interpret_drag`]. Otherwise the reported source is out of date: a drop
/// into the bucket the task already occupies is [`DragOutcome::Unchanged`],
/// and any other drop is a status change from `stored`.
#[must_use]
pub const fn interpret_drag_at(result: &DragResult, stored: TaskStatus) -> DragOutcome {
    let task_id = result.task_id;
    let Some(destination) = result.destination else {
        return DragOutcome::Cancelled;
    };

    if same_bucket(stored, result.source.bucket) {
        return interpret_drag(result);
    }

    if same_bucket(stored, destination.bucket) {
        DragOutcome::Unchanged { task_id }
    } else {
        DragOutcome::StatusChange {
            task_id,
            from: stored,
            to: destination.bucket,
        }
    }
}

// `PartialEq::eq` is not callable in const context.
const fn same_bucket(left: TaskStatus, right: TaskStatus) -> bool {
    left.column_index() == right.column_index()
}
