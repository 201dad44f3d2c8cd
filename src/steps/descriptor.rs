//! Shared description of a pipeline step.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::exec::CommandSpawner;

/// What a step runs and how it reports success.
///
/// A descriptor is immutable once constructed. Executing a step never touches
/// its descriptor, so re-running a step is safe up to whatever side effects
/// the wrapped tool has.
#[derive(Debug, Clone)]
pub struct StepDescriptor {
    name: String,
    program: String,
    args: Vec<String>,
    project: PathBuf,
    success_message: String,
}

impl StepDescriptor {
    pub fn new(
        name: &str,
        program: &str,
        args: &[&str],
        project: &Path,
        success_message: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            project: project.to_path_buf(),
            success_message: success_message.to_string(),
        }
    }

    /// Step name, as used in error reports.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Message written to the output sink when the step succeeds.
    pub fn success_message(&self) -> &str {
        &self.success_message
    }

    /// Project directory the step's tool runs in.
    pub fn project(&self) -> &Path {
        &self.project
    }

    /// Build this step's command, rooted at the project directory.
    pub(crate) fn command(&self, spawner: &dyn CommandSpawner) -> Command {
        let mut cmd = spawner.command(&self.program, &self.args);
        cmd.current_dir(&self.project);
        cmd
    }
}
