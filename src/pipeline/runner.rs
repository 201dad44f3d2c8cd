//! Pipeline assembly and execution.

use std::io::Write;
use std::path::Path;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{CairnError, Result, StepError};
use crate::exec::{CommandSpawner, SystemSpawner};
use crate::steps::{CommandStep, QuietStep, Step, StepDescriptor, TimeoutStep};

use super::signal::{self, Signal};

/// Options for a pipeline run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Branch pushed by the final step.
    pub branch: String,

    /// Wall-clock budget for the push step. Zero falls back to the
    /// step's own 30-second default.
    pub push_timeout: Duration,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            branch: "main".to_string(),
            push_timeout: Duration::from_secs(10),
        }
    }
}

/// A fixed, ordered sequence of steps executed to first failure.
///
/// Assembled once per run; steps and their descriptors are read-only while
/// the run is in flight.
pub struct Pipeline {
    steps: Vec<Box<dyn Step>>,
}

impl Pipeline {
    pub fn new(steps: Vec<Box<dyn Step>>) -> Self {
        Self { steps }
    }

    /// Number of steps in the sequence.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step on the calling thread, stopping at the first failure.
    ///
    /// Each success message is written to `out` on its own line, in step
    /// order, only after the step has completed. The first step error is
    /// returned unchanged; no message is written for a failing step.
    pub fn run(&self, out: &mut dyn Write) -> Result<()> {
        for step in &self.steps {
            let message = step.execute()?;
            writeln!(out, "{message}")?;
        }
        Ok(())
    }

    /// Run the steps on a worker thread while watching for SIGINT/SIGTERM.
    ///
    /// Step outcomes and the signal notification merge onto one channel; the
    /// first of step failure, completion, or signal decides the run. On a
    /// signal the run returns [`CairnError::Interrupted`] immediately. The
    /// worker and any subprocess still in flight are abandoned, not killed;
    /// the worker's next send fails and unwinds it.
    pub fn run_cancellable(self, out: &mut dyn Write) -> Result<()> {
        let (tx, rx) = mpsc::channel();

        let signal_tx = tx.clone();
        signal::watch_once(move |sig| {
            let _ = signal_tx.send(Event::Signalled(sig));
        });

        let steps = self.steps;
        thread::spawn(move || {
            for step in &steps {
                match step.execute() {
                    Ok(message) => {
                        if tx.send(Event::Output(message)).is_err() {
                            return;
                        }
                    }
                    Err(err) => {
                        let _ = tx.send(Event::Failed(err));
                        return;
                    }
                }
            }
            let _ = tx.send(Event::Done);
        });

        drain(&rx, out)
    }
}

/// What the receive loop can observe while a cancellable run is in flight.
enum Event {
    /// A step succeeded with this message.
    Output(String),
    /// A step failed; the run is over.
    Failed(StepError),
    /// Every step succeeded.
    Done,
    /// An OS signal arrived before the worker finished.
    Signalled(Signal),
}

/// Consume merged worker and signal events until one decides the run.
///
/// The caller's thread is the only sink writer. A sink-write failure ends
/// the run like a step failure, propagated as the raw `io::Error`.
fn drain(rx: &mpsc::Receiver<Event>, out: &mut dyn Write) -> Result<()> {
    loop {
        match rx.recv() {
            Ok(Event::Output(message)) => writeln!(out, "{message}")?,
            Ok(Event::Failed(err)) => return Err(err.into()),
            Ok(Event::Done) => return Ok(()),
            Ok(Event::Signalled(sig)) => {
                warn!(signal = %sig, "pipeline interrupted");
                return Err(CairnError::Interrupted(sig));
            }
            // Every sender is gone without a verdict: the worker died.
            Err(_) => {
                return Err(anyhow::anyhow!("pipeline worker stopped without reporting").into())
            }
        }
    }
}

/// Build the standard four-step validation pipeline for a Go project:
/// build, test, format check, push.
pub fn assemble(project: &Path, options: &RunOptions, spawner: Arc<dyn CommandSpawner>) -> Pipeline {
    let steps: Vec<Box<dyn Step>> = vec![
        Box::new(CommandStep::new(
            StepDescriptor::new(
                "go build",
                "go",
                &["build", ".", "errors"],
                project,
                "Go Build: SUCCESS",
            ),
            Arc::clone(&spawner),
        )),
        Box::new(CommandStep::new(
            StepDescriptor::new("go test", "go", &["test", "-v"], project, "Go Test: SUCCESS"),
            Arc::clone(&spawner),
        )),
        Box::new(QuietStep::new(
            StepDescriptor::new("go fmt", "gofmt", &["-l", "."], project, "Gofmt: SUCCESS"),
            Arc::clone(&spawner),
        )),
        Box::new(TimeoutStep::new(
            StepDescriptor::new(
                "git push",
                "git",
                &["push", "origin", options.branch.as_str()],
                project,
                "Git Push: SUCCESS",
            ),
            spawner,
            options.push_timeout,
        )),
    ];

    Pipeline::new(steps)
}

/// Run the standard pipeline against `project`, writing one line per
/// successful step to `out`.
///
/// An empty `project` is a configuration error returned before any step
/// executes.
pub fn run(project: &Path, out: &mut dyn Write) -> Result<()> {
    run_with(project, out, &RunOptions::default())
}

/// As [`run`], with the push branch and timeout taken from `options`.
pub fn run_with(project: &Path, out: &mut dyn Write, options: &RunOptions) -> Result<()> {
    if project.as_os_str().is_empty() {
        return Err(CairnError::MissingProject);
    }

    debug!(project = %project.display(), branch = %options.branch, "starting pipeline");
    assemble(project, options, Arc::new(SystemSpawner)).run_cancellable(out)
}
