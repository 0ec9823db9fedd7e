use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;

/// Captured result of an external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    #[must_use]
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    #[must_use]
    pub fn failure(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Dependency injection interface for running `git` and `gh`.
///
/// Production code uses `TokioCommandRunner`; tests substitute a runner with canned output.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// # Errors
    /// Returns error if the program cannot be started. A non-zero exit is not an error.
    async fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<CommandOutput>;
}

#[derive(Debug, Default)]
pub struct TokioCommandRunner;

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<CommandOutput> {
        let mut cmd = tokio::process::Command::new(program);
        cmd.args(args);
        if let Some(cwd) = cwd {
            cmd.current_dir(cwd);
        }
        let output = cmd
            .output()
            .await
            .context(format!("Failed to run {program}"))?;
        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_tokio_command_runner_success() {
        let temp_dir = std::env::temp_dir();
        let output = TokioCommandRunner
            .run("sh", &["-c", "echo hello"], Some(&temp_dir))
            .await
            .unwrap();
        assert!(output.success);
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[tokio::test]
    async fn test_tokio_command_runner_failure_is_not_an_error() {
        let output = TokioCommandRunner
            .run("sh", &["-c", "echo oops >&2; exit 3"], None)
            .await
            .unwrap();
        assert!(!output.success);
        assert_eq!(output.stderr.trim(), "oops");
    }

    #[tokio::test]
    async fn test_tokio_command_runner_missing_program() {
        let result = TokioCommandRunner
            .run("pombump-definitely-not-installed", &[], None)
            .await;
        assert!(result.is_err());
    }

    #[test]
    fn test_command_output_constructors() {
        assert_eq!(
            CommandOutput::success("ok"),
            CommandOutput {
                success: true,
                stdout: "ok".to_string(),
                stderr: String::new(),
            }
        );
        assert!(!CommandOutput::failure("bad").success);
    }
}
