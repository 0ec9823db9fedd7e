use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Consumer repository settings loaded from `.github/project.yml`.
///
/// Only the keys pombump acts on are modelled; everything else in the file is ignored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectConfig {
    #[serde(default)]
    pub github_automation: GithubAutomation,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct GithubAutomation {
    /// Enable GitHub auto-merge on version bump pull requests (default: true)
    #[serde(default = "default_auto_merge")]
    pub auto_merge_build_versions: bool,
}

fn default_auto_merge() -> bool {
    true
}

impl Default for GithubAutomation {
    fn default() -> Self {
        Self {
            auto_merge_build_versions: default_auto_merge(),
        }
    }
}

impl ProjectConfig {
    /// Parse `project.yml` content. An empty document yields the defaults.
    ///
    /// # Errors
    /// Returns error if the content is not valid YAML for this shape.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str::<Option<Self>>(content)?.unwrap_or_default())
    }

    #[must_use]
    pub const fn auto_merge_enabled(&self) -> bool {
        self.github_automation.auto_merge_build_versions
    }
}
