use anyhow::{Context, Result};
use std::path::Path;
use tokio::{fs::OpenOptions, io::AsyncWriteExt};

/// Append markdown to the GitHub Actions step summary.
///
/// No-op when `GITHUB_STEP_SUMMARY` is not set (e.g. running locally).
///
/// # Errors
/// Returns error if the summary file cannot be written.
pub async fn write_summary(text: &str) -> Result<()> {
    match std::env::var_os("GITHUB_STEP_SUMMARY") {
        Some(path) if !path.is_empty() => append_summary(Path::new(&path), text).await,
        _ => Ok(()),
    }
}

/// # Errors
/// Returns error if the file cannot be opened or written.
pub async fn append_summary(path: &Path, text: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .context(format!("Failed to open step summary - {}", path.display()))?;
    file.write_all(format!("{text}\n").as_bytes()).await?;
    file.flush().await?;
    Ok(())
}
