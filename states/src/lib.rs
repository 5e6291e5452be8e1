//! Task bookkeeping shared by the QR Studio business layer and front-ends.
//!
//! - [`TaskId`] / [`TaskHandle`]: identify a spawned task and cancel it cooperatively.
//! - [`TaskSlot`]: holds at most one in-flight task and tells stale results apart.
//! - [`Updater`] / [`Reader`]: a typed channel carrying `(TaskId, T)` results from
//!   background tasks back to the thread that owns the state.

mod slot;
mod state;
mod task;

pub use slot::TaskSlot;
pub use state::{Reader, Updater, channel};
pub use task::{TaskHandle, TaskId};
