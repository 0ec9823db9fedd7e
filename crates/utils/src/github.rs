use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

use crate::{CommandOutput, CommandRunner, Git};

/// Open pull request as listed by `gh pr list --json number,url,headRefName`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    pub number: u64,
    pub url: String,
    #[serde(default)]
    pub head_ref_name: String,
}

/// GitHub operations through the `gh` CLI.
pub struct GitHub<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> GitHub<'a> {
    #[must_use]
    pub const fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    async fn run(&self, args: &[&str], cwd: Option<&Path>) -> CommandOutput {
        self.runner
            .run("gh", args, cwd)
            .await
            .unwrap_or_else(|e| CommandOutput::failure(e.to_string()))
    }

    /// Shallow clone `full_repo` into `target_dir` and let git push through `gh` credentials.
    pub async fn clone_repo(&self, full_repo: &str, target_dir: &Path) -> CommandOutput {
        let target = target_dir.to_string_lossy();
        let output = self
            .run(
                &["repo", "clone", full_repo, &target, "--", "--depth", "1"],
                None,
            )
            .await;
        if output.success {
            let configured = Git::new(self.runner, target_dir)
                .run(&["config", "credential.helper", "!gh auth git-credential"])
                .await;
            if !configured.success {
                warn!(
                    "Failed to configure credential helper for {full_repo}: {}",
                    configured.stderr.trim()
                );
            }
        }
        output
    }

    /// Open pull requests of `full_repo` whose head branch starts with `branch_prefix`.
    pub async fn find_open_prs_by_branch_prefix(
        &self,
        full_repo: &str,
        branch_prefix: &str,
    ) -> Vec<PullRequest> {
        let output = self
            .run(
                &[
                    "pr",
                    "list",
                    "--repo",
                    full_repo,
                    "--state",
                    "open",
                    "--json",
                    "number,url,headRefName",
                    "--limit",
                    "50",
                ],
                None,
            )
            .await;
        if !output.success {
            warn!("Failed to list PRs for {full_repo}: {}", output.stderr.trim());
            return Vec::new();
        }
        serde_json::from_str::<Vec<PullRequest>>(&output.stdout)
            .inspect_err(|e| warn!("Unexpected PR list output for {full_repo}: {e}"))
            .unwrap_or_default()
            .into_iter()
            .filter(|pr| pr.head_ref_name.starts_with(branch_prefix))
            .collect()
    }

    /// Comment on and close every open pull request whose branch starts with `branch_prefix`,
    /// except the one on `exclude_branch`. Returns the URLs of the closed pull requests.
    pub async fn close_stale_prs(
        &self,
        full_repo: &str,
        branch_prefix: &str,
        reason: &str,
        exclude_branch: Option<&str>,
    ) -> Vec<String> {
        let mut closed = Vec::new();
        for pr in self
            .find_open_prs_by_branch_prefix(full_repo, branch_prefix)
            .await
        {
            if exclude_branch == Some(pr.head_ref_name.as_str()) {
                continue;
            }
            let number = pr.number.to_string();
            info!("Closing stale PR #{number}: {}", pr.url);

            self.run(
                &["pr", "comment", &number, "--repo", full_repo, "--body", reason],
                None,
            )
            .await;
            let output = self
                .run(
                    &["pr", "close", &number, "--repo", full_repo, "--delete-branch"],
                    None,
                )
                .await;
            if output.success {
                info!("Closed stale PR #{number}");
                closed.push(pr.url);
            } else {
                warn!("Failed to close PR #{number}: {}", output.stderr.trim());
            }
        }
        closed
    }

    /// Open a pull request for `branch`. On success stdout holds the PR URL.
    pub async fn create_pr(
        &self,
        full_repo: &str,
        repo_dir: &Path,
        branch: &str,
        title: &str,
        body: &str,
    ) -> CommandOutput {
        self.run(
            &[
                "pr", "create", "--repo", full_repo, "--head", branch, "--title", title, "--body",
                body,
            ],
            Some(repo_dir),
        )
        .await
    }

    /// Enable GitHub auto-merge (squash, delete branch). Returns immediately; the merge itself
    /// happens once checks pass.
    pub async fn enable_auto_merge(&self, pr_url: &str) -> bool {
        info!("Auto-merge: enabling for {pr_url}");
        let output = self
            .run(
                &["pr", "merge", "--auto", "--squash", "--delete-branch", pr_url],
                None,
            )
            .await;
        if output.success {
            info!("Auto-merge enabled: {pr_url}");
        } else {
            warn!("Failed to enable auto-merge: {}", output.stderr.trim());
        }
        output.success
    }
}
