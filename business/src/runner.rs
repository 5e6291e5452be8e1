use std::sync::Arc;

use log::{debug, warn};
use qrstudio_states::{Reader, TaskHandle, TaskId, TaskSlot, Updater, channel};
use tokio::runtime::Handle;

use crate::{AnalysisFailure, AnalysisResult, Analyzer, Session, SubmitError};

pub type Outcome = Result<AnalysisResult, AnalysisFailure>;

/// Runs analyses for a [`Session`] on a tokio runtime, one at a time.
///
/// Results come back over a channel and are applied by [`AnalysisRunner::poll`]
/// on the thread that owns the session. Results of cancelled or superseded
/// tasks are dropped. Dropping the runner cancels the task in flight.
pub struct AnalysisRunner {
    analyzer: Arc<dyn Analyzer>,
    runtime: Handle,
    slot: TaskSlot,
    updater: Updater<Outcome>,
    reader: Reader<Outcome>,
}

impl AnalysisRunner {
    pub fn new(analyzer: Arc<dyn Analyzer>, runtime: Handle) -> Self {
        let (updater, reader) = channel();
        Self {
            analyzer,
            runtime,
            slot: TaskSlot::new::<Self>(),
            updater,
            reader,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.slot.is_busy()
    }

    /// Submits the session's input and spawns its analysis.
    pub fn submit(&mut self, session: &mut Session) -> Result<TaskId, SubmitError> {
        let id = self.slot.next_id();
        let text = session.submit(id)?;
        let handle = self.slot.begin();
        self.spawn(handle, text);
        Ok(id)
    }

    fn spawn(&self, handle: TaskHandle, text: String) {
        let analyzer = Arc::clone(&self.analyzer);
        let updater = self.updater.clone();
        let runtime = self.runtime.clone();
        let token = handle.cancellation_token();
        let id = handle.id();

        self.runtime.spawn(async move {
            // Inner task so a panicking analyzer surfaces as a JoinError.
            let work = runtime.spawn(async move { analyzer.analyze(&text).await });
            let abort = work.abort_handle();

            let outcome = tokio::select! {
                () = token.cancelled() => {
                    debug!("{id} cancelled, aborting analysis");
                    abort.abort();
                    return;
                }
                joined = work => match joined {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        warn!("{id} did not complete: {e}");
                        Err(AnalysisFailure::Aborted)
                    }
                },
            };

            if !updater.set(id, outcome) {
                debug!("{id} finished after its runner was dropped");
            }
        });
    }

    /// Applies every finished result. Returns whether the session changed.
    pub fn poll(&mut self, session: &mut Session) -> bool {
        let mut changed = false;
        for (id, outcome) in self.reader.drain() {
            changed |= self.apply(session, id, outcome);
        }
        changed
    }

    /// Waits until the task in flight, if any, has been applied.
    pub async fn settle(&mut self, session: &mut Session) -> bool {
        let mut changed = self.poll(session);
        while self.slot.is_busy() {
            let Some((id, outcome)) = self.reader.next().await else {
                break;
            };
            changed |= self.apply(session, id, outcome);
        }
        changed
    }

    /// Abandons the task in flight and resets the session.
    pub fn reset(&mut self, session: &mut Session) {
        self.slot.cancel();
        session.reset();
    }

    fn apply(&mut self, session: &mut Session, id: TaskId, outcome: Outcome) -> bool {
        if !self.slot.finish(id) {
            debug!("Dropping result of stale {id}");
            return false;
        }
        session.apply_outcome(id, outcome)
    }
}
