//! Identity and cancellation for background tasks.
//!
//! A [`TaskId`] pairs the `TypeId` of whatever owns the task (for example the
//! analysis runner) with a generation counter. Every new submission gets a
//! higher generation, so a result tagged with an older id can be recognised
//! and dropped instead of overwriting newer state.
//!
//! A [`TaskHandle`] adds a `CancellationToken` so the owner can tell the task to
//! stop. Cancellation is cooperative: the task has to await
//! `token.cancelled()` (usually inside `tokio::select!`) for it to take effect.
//!
//! ```ignore
//! let token = CancellationToken::new();
//! let handle = TaskHandle::new(TaskId::new(TypeId::of::<AnalysisRunner>(), 1), token);
//!
//! tokio::spawn({
//!     let token = handle.cancellation_token();
//!     async move {
//!         tokio::select! {
//!             _ = token.cancelled() => {}
//!             result = analyzer.analyze(&text) => updater.set(id, result),
//!         }
//!     }
//! });
//! ```

use std::any::TypeId;
use std::fmt;

use tokio_util::sync::CancellationToken;

/// Identifies one spawned task by owner type and generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    /// The `TypeId` of the owner that spawned this task.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Generation counter. Higher means more recently spawned.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task#{}", self.generation)
    }
}

/// A spawned task's id together with its cancellation token.
///
/// Clones share the token, so cancelling any clone cancels them all.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Returns a clone of the token to move into the async work.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Requests cooperative cancellation.
    ///
    /// Does not abort anything by itself; the task must observe the token.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}
