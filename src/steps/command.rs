//! Step that runs an external tool and trusts its exit status.

use std::process::Stdio;
use std::sync::Arc;

use tracing::debug;

use crate::error::{StepCause, StepError};
use crate::exec::CommandSpawner;
use crate::steps::{Step, StepDescriptor};

/// The base pipeline step: spawn the tool, wait, and judge the exit status.
///
/// The tool's stdout and stderr are left attached to the parent process so
/// its diagnostics reach the operator; nothing here depends on them.
pub struct CommandStep {
    descriptor: StepDescriptor,
    spawner: Arc<dyn CommandSpawner>,
}

impl CommandStep {
    pub fn new(descriptor: StepDescriptor, spawner: Arc<dyn CommandSpawner>) -> Self {
        Self {
            descriptor,
            spawner,
        }
    }
}

impl Step for CommandStep {
    fn execute(&self) -> Result<String, StepError> {
        let name = self.descriptor.name();
        debug!(step = name, "running step");

        let mut cmd = self.descriptor.command(self.spawner.as_ref());
        cmd.stdin(Stdio::null());

        let status = cmd
            .status()
            .map_err(|err| StepError::execution(name, StepCause::Io(err)))?;

        if !status.success() {
            return Err(StepError::execution(name, StepCause::Exit(status)));
        }

        Ok(self.descriptor.success_message().to_string())
    }
}
