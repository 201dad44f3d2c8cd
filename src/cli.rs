//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The entry point is the [`Cli`] struct.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::pipeline::RunOptions;

/// Cairn - Minimal CI pipeline runner for Go projects.
#[derive(Debug, Parser)]
#[command(name = "cairn")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Project directory to validate
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Branch pushed by the final step
    #[arg(short, long, default_value = "main")]
    pub branch: String,

    /// Budget for the push step, in seconds (0 uses the 30-second default)
    #[arg(long, default_value_t = 10)]
    pub push_timeout: u64,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Run options carried by these arguments.
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            branch: self.branch.clone(),
            push_timeout: Duration::from_secs(self.push_timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_standard_pipeline() {
        let cli = Cli::try_parse_from(["cairn", "-p", "/tmp/project"]).unwrap();
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/project")));
        assert_eq!(cli.branch, "main");
        assert_eq!(cli.push_timeout, 10);
        assert!(!cli.debug);
    }

    #[test]
    fn project_is_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["cairn"]).unwrap();
        assert!(cli.project.is_none());
    }

    #[test]
    fn branch_and_timeout_are_configurable() {
        let cli = Cli::try_parse_from([
            "cairn",
            "--project",
            "/tmp/project",
            "--branch",
            "release",
            "--push-timeout",
            "45",
        ])
        .unwrap();

        let options = cli.run_options();
        assert_eq!(options.branch, "release");
        assert_eq!(options.push_timeout, Duration::from_secs(45));
    }

    #[test]
    fn non_numeric_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["cairn", "--push-timeout", "soon"]).is_err());
    }
}
