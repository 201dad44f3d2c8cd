//! Pipeline orchestration.
//!
//! This module assembles and runs the fixed validation sequence:
//!
//! - [`Pipeline`] - an ordered sequence of steps executed to first failure
//! - [`RunOptions`] - per-run knobs (push branch, push timeout)
//! - [`run`] / [`run_with`] - the top-level run surface
//! - [`assemble`] - the standard build, test, format check, push sequence
//! - [`Signal`] - the cancellation signals a run can be interrupted by
//!
//! A pipeline has two run shapes: [`Pipeline::run`] executes steps on the
//! calling thread, [`Pipeline::run_cancellable`] races them against
//! SIGINT/SIGTERM on a worker thread.

pub mod runner;
pub mod signal;

pub use runner::{assemble, run, run_with, Pipeline, RunOptions};
pub use signal::Signal;
