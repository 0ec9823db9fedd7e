use std::fmt::Display;

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Outcome of updating one consumer repository.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UpdateStatus {
    /// Pull request opened and GitHub auto-merge enabled
    PrAutoMergeEnabled,
    /// Pull request opened and left for manual merge
    PrCreated,
    /// Repository already on the requested version (or nothing to update)
    NoChanges,
    Error,
}

impl UpdateStatus {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !matches!(self, Self::Error)
    }

    /// Plain identifier, identical to the serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PrAutoMergeEnabled => "pr_auto_merge_enabled",
            Self::PrCreated => "pr_created",
            Self::NoChanges => "no_changes",
            Self::Error => "error",
        }
    }
}

impl Display for UpdateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::PrAutoMergeEnabled => "PR (auto-merge)".green().bold(),
                Self::PrCreated => "PR created".yellow().bold(),
                Self::NoChanges => "no changes".blue().bold(),
                Self::Error => "error".red().bold(),
            }
        )
    }
}

/// Result record emitted as `RESULT:{json}` for workflow consumption.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UpdateResult {
    status: UpdateStatus,
    pr_url: Option<String>,
    error: Option<String>,
}

impl UpdateResult {
    #[must_use]
    pub const fn new(status: UpdateStatus, pr_url: Option<String>, error: Option<String>) -> Self {
        Self {
            status,
            pr_url,
            error,
        }
    }

    #[must_use]
    pub const fn no_changes() -> Self {
        Self::new(UpdateStatus::NoChanges, None, None)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(UpdateStatus::Error, None, Some(message.into()))
    }

    #[must_use]
    pub fn pull_request(status: UpdateStatus, pr_url: impl Into<String>) -> Self {
        Self::new(status, Some(pr_url.into()), None)
    }

    #[must_use]
    pub const fn status(&self) -> UpdateStatus {
        self.status
    }

    #[must_use]
    pub fn pr_url(&self) -> Option<&str> {
        self.pr_url.as_deref()
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
