//! Step that bounds its tool's wall-clock time.

use std::process::Stdio;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::error::{StepCause, StepError};
use crate::exec::CommandSpawner;
use crate::steps::{Step, StepDescriptor};

/// Budget substituted when a step is constructed with a zero timeout.
const DEFAULT_BUDGET: Duration = Duration::from_secs(30);

/// How often the deadline is checked while the tool runs.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Step whose tool must finish within a fixed wall-clock budget.
///
/// When the deadline fires the child is killed and reaped, and the failure
/// carries the deadline sentinel so callers can tell a slow tool from a
/// broken one.
pub struct TimeoutStep {
    descriptor: StepDescriptor,
    spawner: Arc<dyn CommandSpawner>,
    budget: Duration,
}

impl TimeoutStep {
    /// A zero `budget` is invalid input and becomes the 30-second default.
    pub fn new(
        descriptor: StepDescriptor,
        spawner: Arc<dyn CommandSpawner>,
        budget: Duration,
    ) -> Self {
        let budget = if budget.is_zero() {
            DEFAULT_BUDGET
        } else {
            budget
        };
        Self {
            descriptor,
            spawner,
            budget,
        }
    }

    /// Effective wall-clock budget, after zero normalization.
    pub fn budget(&self) -> Duration {
        self.budget
    }
}

impl Step for TimeoutStep {
    fn execute(&self) -> Result<String, StepError> {
        let name = self.descriptor.name();
        debug!(step = name, budget = ?self.budget, "running timed step");

        let mut cmd = self.descriptor.command(self.spawner.as_ref());
        cmd.stdin(Stdio::null());

        let mut child = cmd
            .spawn()
            .map_err(|err| StepError::execution(name, StepCause::Io(err)))?;

        let deadline = Instant::now() + self.budget;
        loop {
            match child.try_wait() {
                Ok(Some(status)) => {
                    if !status.success() {
                        return Err(StepError::execution(name, StepCause::Exit(status)));
                    }
                    return Ok(self.descriptor.success_message().to_string());
                }
                Ok(None) => {
                    if Instant::now() >= deadline {
                        warn!(step = name, "budget exhausted, killing tool");
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(StepError::timed_out(name));
                    }
                    thread::sleep(POLL_INTERVAL);
                }
                Err(err) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(StepError::execution(name, StepCause::Io(err)));
                }
            }
        }
    }
}
