//! Error types for Cairn operations.
//!
//! This module defines [`CairnError`], the primary error type used throughout
//! the application, [`StepError`] for failures reported by individual
//! pipeline steps, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `StepError` for anything a step reports; the pipeline propagates it
//!   unchanged so callers see exactly which step failed and why
//! - Use `CairnError` for run-level outcomes that are not tied to one step
//!   (missing project directory, signal interruption, sink write failures)
//! - Use `anyhow::Error` (via `CairnError::Other`) for unexpected errors

use std::process::ExitStatus;

use thiserror::Error;

use crate::pipeline::Signal;

/// Core error type for Cairn operations.
#[derive(Debug, Error)]
pub enum CairnError {
    /// Pipeline was invoked without a project directory.
    #[error("project directory is required")]
    MissingProject,

    /// A pipeline step failed; carries the step's own error unchanged.
    #[error(transparent)]
    Step(#[from] StepError),

    /// The run was interrupted by an OS signal before the steps finished.
    #[error("received signal: {0}")]
    Interrupted(Signal),

    /// Writing to the output sink failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CairnError {
    /// Whether this run ended because an OS signal arrived.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, CairnError::Interrupted(_))
    }

    /// Whether this run ended because a step outlived its time budget.
    pub fn is_timeout(&self) -> bool {
        matches!(self, CairnError::Step(err) if err.is_timeout())
    }
}

/// Result type alias for Cairn operations.
pub type Result<T> = std::result::Result<T, CairnError>;

/// Failure reported by a single pipeline step.
///
/// `cause` distinguishes how the step failed: `Some` means the wrapped tool
/// could not run to a clean exit, `None` means the tool ran fine but reported
/// a defect through its output.
#[derive(Debug, Error)]
#[error("step {step:?}: {message}")]
pub struct StepError {
    /// Name of the failing step.
    pub step: String,

    /// Human-readable failure description.
    pub message: String,

    /// Underlying cause, when the tool itself failed.
    #[source]
    pub cause: Option<StepCause>,
}

impl StepError {
    /// The wrapped tool could not be started or exited unsuccessfully.
    pub fn execution(step: &str, cause: StepCause) -> Self {
        Self {
            step: step.to_string(),
            message: "failed to execute".to_string(),
            cause: Some(cause),
        }
    }

    /// The wrapped tool exited cleanly but reported findings on stdout.
    pub fn reported(step: &str, output: &str) -> Self {
        Self {
            step: step.to_string(),
            message: format!("invalid format: {output}"),
            cause: None,
        }
    }

    /// The wrapped tool outlived its wall-clock budget.
    pub fn timed_out(step: &str) -> Self {
        Self {
            step: step.to_string(),
            message: "failed time out".to_string(),
            cause: Some(StepCause::DeadlineExceeded),
        }
    }

    /// Whether this failure was a time-budget exhaustion.
    pub fn is_timeout(&self) -> bool {
        matches!(self.cause, Some(StepCause::DeadlineExceeded))
    }
}

// Step errors compare by the failing step alone. Test expectations name the
// step they expect to fail without predicting the exact message or cause.
impl PartialEq for StepError {
    fn eq(&self, other: &Self) -> bool {
        self.step == other.step
    }
}

/// Why a step's tool failed.
#[derive(Debug, Error)]
pub enum StepCause {
    /// The tool did not finish within the step's time budget.
    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// The tool exited with a non-zero status.
    #[error("{0}")]
    Exit(ExitStatus),

    /// The tool could not be spawned or waited on.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
