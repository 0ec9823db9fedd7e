use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::{CommandOutput, CommandRunner};

pub const BOT_EMAIL: &str = "action@github.com";
pub const BOT_NAME: &str = "cuioss-release-bot";

/// `git` bound to one working copy.
pub struct Git<'a> {
    runner: &'a dyn CommandRunner,
    repo_dir: &'a Path,
}

impl<'a> Git<'a> {
    #[must_use]
    pub const fn new(runner: &'a dyn CommandRunner, repo_dir: &'a Path) -> Self {
        Self { runner, repo_dir }
    }

    /// Run `git <args>` in the working copy. A spawn failure is reported as a failed command.
    pub async fn run(&self, args: &[&str]) -> CommandOutput {
        self.runner
            .run("git", args, Some(self.repo_dir))
            .await
            .unwrap_or_else(|e| CommandOutput::failure(e.to_string()))
    }

    async fn run_checked(&self, args: &[&str]) -> Result<CommandOutput> {
        let output = self.run(args).await;
        if !output.success {
            anyhow::bail!("git {} failed: {}", args.join(" "), output.stderr.trim());
        }
        Ok(output)
    }

    /// # Errors
    /// Returns error if the branch cannot be created.
    pub async fn checkout_new_branch(&self, branch: &str) -> Result<()> {
        self.run_checked(&["checkout", "-b", branch]).await?;
        Ok(())
    }

    /// Commit as the release bot.
    ///
    /// # Errors
    /// Returns error if git config cannot be written.
    pub async fn configure_author(&self) -> Result<()> {
        self.run_checked(&["config", "user.email", BOT_EMAIL]).await?;
        self.run_checked(&["config", "user.name", BOT_NAME]).await?;
        Ok(())
    }

    /// # Errors
    /// Returns error if staging fails.
    pub async fn add(&self, paths: &[PathBuf]) -> Result<()> {
        let paths = paths
            .iter()
            .map(|path| path.to_string_lossy().to_string())
            .collect::<Vec<_>>();
        let mut args = vec!["add", "--"];
        args.extend(paths.iter().map(String::as_str));
        self.run_checked(&args).await?;
        Ok(())
    }

    /// # Errors
    /// Returns error if there is nothing to commit or the commit fails.
    pub async fn commit(&self, message: &str) -> Result<()> {
        self.run_checked(&["commit", "-m", message]).await?;
        Ok(())
    }

    pub async fn push(&self, branch: &str) -> CommandOutput {
        self.run(&["push", "-u", "origin", branch]).await
    }
}
