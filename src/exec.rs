//! Process spawning seam.
//!
//! Steps never call [`Command::new`] themselves; they build commands through
//! a [`CommandSpawner`] injected at construction. Production code uses
//! [`SystemSpawner`]; tests substitute a closure that maps tool invocations
//! to scripted commands.

use std::process::Command;

/// Strategy for turning a program name and arguments into a runnable
/// [`Command`].
///
/// Implementations decide only *what* gets spawned. Working directory and
/// stdio wiring stay with the step that executes the command.
pub trait CommandSpawner: Send + Sync {
    fn command(&self, program: &str, args: &[String]) -> Command;
}

/// Spawner that launches the requested program as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpawner;

impl CommandSpawner for SystemSpawner {
    fn command(&self, program: &str, args: &[String]) -> Command {
        let mut cmd = Command::new(program);
        cmd.args(args);
        cmd
    }
}

impl<F> CommandSpawner for F
where
    F: Fn(&str, &[String]) -> Command + Send + Sync,
{
    fn command(&self, program: &str, args: &[String]) -> Command {
        self(program, args)
    }
}
