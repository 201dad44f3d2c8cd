//! Pipeline step variants.
//!
//! A step wraps exactly one external-process invocation. This module provides
//! the execution contract and the three variants Cairn pipelines are built
//! from:
//!
//! - [`StepDescriptor`] - what a step runs and how it reports success
//! - [`CommandStep`] - runs the tool and trusts its exit status
//! - [`QuietStep`] - additionally treats captured tool output as a defect
//! - [`TimeoutStep`] - additionally bounds the tool's wall-clock time
//!
//! Variants compose a descriptor rather than extend each other; only
//! execute-time behavior differs.

pub mod command;
pub mod descriptor;
pub mod quiet;
pub mod timeout;

pub use command::CommandStep;
pub use descriptor::StepDescriptor;
pub use quiet::QuietStep;
pub use timeout::TimeoutStep;

use crate::error::StepError;

/// One unit of pipeline work.
///
/// Implementations spawn their tool, wait for its outcome, and return either
/// the descriptor's success message or a [`StepError`] naming the step.
/// `Send` is required so a pipeline can move its steps onto a worker thread
/// for the cancellable run shape.
pub trait Step: Send {
    fn execute(&self) -> Result<String, StepError>;
}
