use std::any::TypeId;

use log::debug;
use tokio_util::sync::CancellationToken;

use crate::{TaskHandle, TaskId};

/// Holds at most one in-flight task for a single owner.
///
/// Starting a new task bumps the generation, so anything still running under an
/// older id is stale. Dropping the slot cancels whatever is in flight.
#[derive(Debug)]
pub struct TaskSlot {
    owner: TypeId,
    generation: u64,
    current: Option<TaskHandle>,
}

impl TaskSlot {
    /// Creates an empty slot whose task ids carry `T`'s `TypeId`.
    pub fn new<T: 'static>() -> Self {
        Self {
            owner: TypeId::of::<T>(),
            generation: 0,
            current: None,
        }
    }

    /// The id the next call to [`TaskSlot::begin`] will hand out.
    pub fn next_id(&self) -> TaskId {
        TaskId::new(self.owner, self.generation + 1)
    }

    /// Starts a new task, cancelling the previous one if it is still running.
    pub fn begin(&mut self) -> TaskHandle {
        self.cancel();
        self.generation += 1;
        let handle = TaskHandle::new(
            TaskId::new(self.owner, self.generation),
            CancellationToken::new(),
        );
        self.current = Some(handle.clone());
        handle
    }

    /// Whether a task is in flight.
    pub fn is_busy(&self) -> bool {
        self.current.is_some()
    }

    /// Whether `id` belongs to the task currently in flight.
    pub fn is_current(&self, id: TaskId) -> bool {
        self.current
            .as_ref()
            .is_some_and(|handle| handle.id() == id && !handle.is_cancelled())
    }

    /// Releases the slot if `id` is the current task. Returns `false` for stale ids.
    pub fn finish(&mut self, id: TaskId) -> bool {
        if self.is_current(id) {
            self.current = None;
            true
        } else {
            debug!("Ignoring finish for stale {id}");
            false
        }
    }

    /// Cancels the in-flight task, if any, and empties the slot.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.current.take() {
            debug!("Cancelling {}", handle.id());
            handle.cancel();
        }
    }
}

impl Drop for TaskSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}
