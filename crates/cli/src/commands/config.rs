use anyhow::Result;
use clap::Args;
use pombump_utils::get_project_config;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(about = "Show the consumer configuration read from .github/project.yml")]
pub struct ConfigArgs {
    /// Repository checkout (defaults to the current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

/// Display the resolved consumer configuration
///
/// # Errors
/// Returns error if the current directory is unavailable.
pub async fn handle_config(args: &ConfigArgs) -> Result<()> {
    let dir = match &args.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let config = get_project_config(&dir).await;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
