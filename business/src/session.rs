//! Session state controller.
//!
//! Holds the input text, the current [`SessionStatus`] and the [`QrSettings`],
//! and applies user actions and analysis outcomes to them. Everything here is
//! synchronous; [`crate::AnalysisRunner`] drives the async part.
//!
//! ```text
//!   Idle --submit--> Analyzing --Ok--> Ready --reset--> Idle
//!                        |                ^
//!                       Err               | continue anyway
//!                        v                |
//!                      Error -------------+
//! ```

use log::{debug, info, warn};
use qrstudio_states::TaskId;

use crate::{AnalysisFailure, AnalysisResult, ErrorCorrectionLevel, QrSettings};

/// Coarse status that drives which view is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Analyzing,
    Ready,
    Error,
}

/// Status together with the data that only exists in that state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Idle,
    /// One analysis is in flight for `text`.
    Analyzing { task: TaskId, text: String },
    Ready,
    /// The analysis call failed. Settings still hold their previous values.
    Error { message: String },
}

impl SessionStatus {
    pub fn status(&self) -> Status {
        match self {
            Self::Idle => Status::Idle,
            Self::Analyzing { .. } => Status::Analyzing,
            Self::Ready => Status::Ready,
            Self::Error { .. } => Status::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Please enter some text or a URL.")]
    EmptyInput,
    #[error("An analysis is already running.")]
    Busy,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    input: String,
    status: SessionStatus,
    settings: QrSettings,
}

impl Session {
    pub fn new(settings: QrSettings) -> Self {
        Self {
            input: String::new(),
            status: SessionStatus::Idle,
            settings,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Direct access for text widgets.
    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn status(&self) -> Status {
        self.status.status()
    }

    pub fn session_status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn settings(&self) -> &QrSettings {
        &self.settings
    }

    /// The in-flight task, if analyzing.
    pub fn pending_task(&self) -> Option<TaskId> {
        match &self.status {
            SessionStatus::Analyzing { task, .. } => Some(*task),
            _ => None,
        }
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.status() != Status::Analyzing && !self.input.trim().is_empty()
    }

    /// Starts an analysis tagged with `task`.
    ///
    /// Returns the text to analyze. Rejected input leaves the state untouched.
    pub fn submit(&mut self, task: TaskId) -> Result<String, SubmitError> {
        if self.status() == Status::Analyzing {
            debug!("Submit ignored, analysis already in flight");
            return Err(SubmitError::Busy);
        }
        if self.input.trim().is_empty() {
            info!("Submit rejected: input is empty");
            return Err(SubmitError::EmptyInput);
        }

        let text = self.input.clone();
        info!("Analyzing input as {task}");
        self.status = SessionStatus::Analyzing {
            task,
            text: text.clone(),
        };
        Ok(text)
    }

    /// Applies the outcome of `task`.
    ///
    /// Returns `false` and changes nothing when `task` is not the one in flight,
    /// e.g. after a reset.
    pub fn apply_outcome(
        &mut self,
        task: TaskId,
        outcome: Result<AnalysisResult, AnalysisFailure>,
    ) -> bool {
        let text = match &self.status {
            SessionStatus::Analyzing { task: current, text } if *current == task => text.clone(),
            _ => {
                debug!("Discarding outcome of stale {task}");
                return false;
            }
        };

        match outcome {
            Ok(result) => {
                info!("Analysis finished for {task}, label {:?}", result.label);
                self.settings.apply_analysis(text, result);
                self.status = SessionStatus::Ready;
            }
            Err(failure) => {
                warn!("Analysis failed for {task}: {failure}");
                self.status = SessionStatus::Error {
                    message: failure.to_string(),
                };
            }
        }
        true
    }

    /// Clears the input and returns to idle. Any pending outcome becomes stale.
    pub fn reset(&mut self) {
        self.input.clear();
        self.status = SessionStatus::Idle;
    }

    /// Leaves the error view, keeping the settings as they were.
    pub fn continue_anyway(&mut self) -> bool {
        if self.status() != Status::Error {
            return false;
        }
        self.status = SessionStatus::Ready;
        true
    }

    pub fn edit_label(&mut self, label: impl Into<String>) -> bool {
        self.edit(|s| s.label = label.into())
    }

    pub fn edit_primary_color(&mut self, color: impl Into<String>) -> bool {
        self.edit(|s| s.primary_color = color.into())
    }

    pub fn edit_secondary_color(&mut self, color: impl Into<String>) -> bool {
        self.edit(|s| s.secondary_color = color.into())
    }

    pub fn edit_error_correction_level(&mut self, level: ErrorCorrectionLevel) -> bool {
        self.edit(|s| s.error_correction_level = level)
    }

    pub fn edit_margin(&mut self, margin: u32) -> bool {
        self.edit(|s| s.margin = margin)
    }

    // Manual edits only make sense while the code is shown.
    fn edit(&mut self, apply: impl FnOnce(&mut QrSettings)) -> bool {
        if self.status() != Status::Ready {
            return false;
        }
        apply(&mut self.settings);
        true
    }
}
