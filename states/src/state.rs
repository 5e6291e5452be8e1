use flume::{Receiver, Sender};

use crate::TaskId;

/// Creates a connected [`Updater`] / [`Reader`] pair.
pub fn channel<T>() -> (Updater<T>, Reader<T>) {
    let (send, recv) = flume::unbounded();
    (Updater { send }, Reader { recv })
}

/// Sending half, moved into background tasks to report their result.
#[derive(Debug)]
pub struct Updater<T> {
    send: Sender<(TaskId, T)>,
}

impl<T> Clone for Updater<T> {
    fn clone(&self) -> Self {
        Self {
            send: self.send.clone(),
        }
    }
}

impl<T> Updater<T> {
    /// Publishes the result of task `id`.
    ///
    /// Returns `false` when the reader is gone, which happens when the owner was
    /// dropped while the task was still running.
    pub fn set(&self, id: TaskId, value: T) -> bool {
        self.send.send((id, value)).is_ok()
    }
}

/// Receiving half, polled by the owner of the state.
#[derive(Debug)]
pub struct Reader<T> {
    recv: Receiver<(TaskId, T)>,
}

impl<T> Reader<T> {
    /// Drains every result that is ready right now.
    pub fn drain(&self) -> Vec<(TaskId, T)> {
        self.recv.try_iter().collect()
    }

    /// Waits for the next result. `None` once every updater is dropped.
    pub async fn next(&self) -> Option<(TaskId, T)> {
        self.recv.recv_async().await.ok()
    }
}
