//! Step that treats any tool output as a reported defect.

use std::process::Stdio;
use std::sync::Arc;

use tracing::debug;

use crate::error::{StepCause, StepError};
use crate::exec::CommandSpawner;
use crate::steps::{Step, StepDescriptor};

/// Step for tools that report findings on stdout while still exiting zero,
/// the way `gofmt -l` lists non-conforming files.
///
/// The step succeeds only when the tool stays quiet: a clean exit with any
/// captured stdout is a defect report, returned without a `cause` to mark it
/// as "tool ran correctly and found a problem" rather than "tool broke".
pub struct QuietStep {
    descriptor: StepDescriptor,
    spawner: Arc<dyn CommandSpawner>,
}

impl QuietStep {
    pub fn new(descriptor: StepDescriptor, spawner: Arc<dyn CommandSpawner>) -> Self {
        Self {
            descriptor,
            spawner,
        }
    }
}

impl Step for QuietStep {
    fn execute(&self) -> Result<String, StepError> {
        let name = self.descriptor.name();
        debug!(step = name, "running quiet step");

        let mut cmd = self.descriptor.command(self.spawner.as_ref());
        cmd.stdin(Stdio::null());
        cmd.stderr(Stdio::null());

        let output = cmd
            .output()
            .map_err(|err| StepError::execution(name, StepCause::Io(err)))?;

        if !output.status.success() {
            return Err(StepError::execution(name, StepCause::Exit(output.status)));
        }

        if !output.stdout.is_empty() {
            let findings = String::from_utf8_lossy(&output.stdout);
            return Err(StepError::reported(name, &findings));
        }

        Ok(self.descriptor.success_message().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::process::Command;
    use crate::exec::SystemSpawner;

    fn scripted(script: &'static str) -> Arc<dyn CommandSpawner> {
        Arc::new(move |_: &str, _: &[String]| {
            let mut cmd = Command::new("sh");
            cmd.args(["-c", script]);
            cmd
        })
    }

    fn make_step(spawner: Arc<dyn CommandSpawner>, project: &Path) -> QuietStep {
        QuietStep::new(
            StepDescriptor::new("go fmt", "gofmt", &["-l", "."], project, "Gofmt: SUCCESS"),
            spawner,
        )
    }

    #[test]
    #[cfg(unix)]
    fn quiet_tool_succeeds() {
        let temp = tempfile::TempDir::new().unwrap();
        let step = make_step(scripted(":"), temp.path());
        assert_eq!(step.execute().unwrap(), "Gofmt: SUCCESS");
    }

    #[test]
    #[cfg(unix)]
    fn captured_output_is_a_defect_without_a_cause() {
        let temp = tempfile::TempDir::new().unwrap();
        let step = make_step(scripted("echo main.go"), temp.path());

        let err = step.execute().unwrap_err();
        assert_eq!(err.step, "go fmt");
        assert_eq!(err.message, "invalid format: main.go\n");
        assert!(err.cause.is_none());
    }

    #[test]
    #[cfg(unix)]
    fn stderr_does_not_count_as_a_finding() {
        let temp = tempfile::TempDir::new().unwrap();
        let step = make_step(scripted("echo warning >&2"), temp.path());
        assert!(step.execute().is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn non_zero_exit_is_an_execution_failure() {
        let temp = tempfile::TempDir::new().unwrap();
        let step = make_step(scripted("echo partial && exit 2"), temp.path());

        let err = step.execute().unwrap_err();
        assert_eq!(err.message, "failed to execute");
        assert!(matches!(err.cause, Some(StepCause::Exit(_))));
    }

    #[test]
    fn spawn_failure_is_an_execution_failure() {
        let temp = tempfile::TempDir::new().unwrap();
        let step = QuietStep::new(
            StepDescriptor::new("go fmt", "cairn-no-such-tool", &[], temp.path(), "Gofmt: SUCCESS"),
            Arc::new(SystemSpawner),
        );

        let err = step.execute().unwrap_err();
        assert_eq!(err.step, "go fmt");
        assert!(matches!(err.cause, Some(StepCause::Io(_))));
    }
}
