use pombump_core::ProjectConfig;
use std::path::Path;
use tokio::fs::read_to_string;
use tracing::warn;

pub const PROJECT_CONFIG_PATH: &str = ".github/project.yml";

/// Load the consumer configuration from `<repo_dir>/.github/project.yml`.
///
/// A missing file means defaults. An unreadable or malformed file is logged and also falls back
/// to defaults, so one badly configured consumer never blocks its update.
pub async fn get_project_config(repo_dir: &Path) -> ProjectConfig {
    let config_path = repo_dir.join(PROJECT_CONFIG_PATH);
    if !config_path.is_file() {
        return ProjectConfig::default();
    }
    let content = match read_to_string(&config_path).await {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to read {}: {e}", config_path.display());
            return ProjectConfig::default();
        }
    };
    ProjectConfig::from_yaml(&content).unwrap_or_else(|e| {
        warn!("Failed to read auto-merge config: {e}");
        ProjectConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &Path, content: &str) {
        fs::create_dir_all(dir.join(".github")).unwrap();
        fs::write(dir.join(PROJECT_CONFIG_PATH), content).unwrap();
    }

    #[tokio::test]
    async fn test_get_project_config_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = get_project_config(temp_dir.path()).await;
        assert_eq!(config, ProjectConfig::default());
        assert!(config.auto_merge_enabled());
        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_get_project_config_disabled() {
        let temp_dir = TempDir::new().unwrap();
        write_config(
            temp_dir.path(),
            "github-automation:\n  auto-merge-build-versions: false\n",
        );
        assert!(!get_project_config(temp_dir.path()).await.auto_merge_enabled());
        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_get_project_config_malformed_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        write_config(temp_dir.path(), "github-automation: [unclosed");
        assert!(get_project_config(temp_dir.path()).await.auto_merge_enabled());
        temp_dir.close().unwrap();
    }
}
