//! Cairn - Minimal continuous-integration pipeline runner.
//!
//! Cairn validates a Go project by running a fixed sequence of external
//! tools: build, test, format check, push. The sequence stops at the first
//! failure, each step can be bounded by a wall-clock budget, and a run can
//! be interrupted with SIGINT or SIGTERM.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`exec`] - Process spawning seam
//! - [`pipeline`] - Pipeline assembly, orchestration, and cancellation
//! - [`steps`] - Step variants wrapping external tools
//!
//! # Example
//!
//! ```no_run
//! use cairn::pipeline;
//! use std::path::Path;
//!
//! let mut out = Vec::new();
//! pipeline::run(Path::new("./my-project"), &mut out)?;
//! # Ok::<(), cairn::CairnError>(())
//! ```

pub mod cli;
pub mod error;
pub mod exec;
pub mod pipeline;
pub mod steps;

pub use error::{CairnError, Result};
