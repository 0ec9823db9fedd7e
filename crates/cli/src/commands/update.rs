use anyhow::{Context, Result};
use clap::Args;
use pombump_core::UpdateResult;
use pombump_utils::{CommandRunner, TokioCommandRunner, write_summary};
use tempfile::TempDir;

use crate::{
    consumer::{ConsumerUpdate, update_consumer},
    error::UpdateFailed,
    options::RequestOptions,
};

#[derive(Args, Debug)]
#[command(about = "Clone a consumer repository, rewrite its POMs and open a pull request")]
pub struct UpdateArgs {
    /// GitHub organisation of the consumer
    #[arg(long, default_value = "cuioss")]
    pub org: String,

    /// Consumer repository name
    #[arg(long)]
    pub repo: String,

    #[command(flatten)]
    pub request: RequestOptions,

    /// Glob of pom.xml paths to skip, relative to the checkout (repeatable)
    #[arg(long)]
    pub ignore: Vec<String>,
}

/// Update one consumer repository through `git` and `gh`
///
/// # Errors
/// Returns [`UpdateFailed`] if the update ends with an `error` result.
pub async fn handle_update(args: &UpdateArgs) -> Result<()> {
    update_with_runner(&TokioCommandRunner, args).await
}

pub(crate) async fn update_with_runner(runner: &dyn CommandRunner, args: &UpdateArgs) -> Result<()> {
    let request = args.request.to_request();
    let work_dir = TempDir::new().context("Failed to create working directory")?;
    let update = ConsumerUpdate {
        org: &args.org,
        repo: &args.repo,
        request: &request,
        ignore: &args.ignore,
    };
    let result = update_consumer(runner, &update, work_dir.path()).await;

    println!("RESULT:{}", serde_json::to_string(&result)?);
    println!("{}: {}", args.repo, result.status());
    write_summary(&summary_row(&args.repo, &result)).await?;

    if result.is_success() {
        Ok(())
    } else {
        Err(UpdateFailed {
            repo: format!("{}/{}", args.org, args.repo),
            message: result.error_message().unwrap_or_default().to_string(),
        }
        .into())
    }
}

fn summary_row(repo: &str, result: &UpdateResult) -> String {
    let detail = result
        .pr_url()
        .or_else(|| result.error_message())
        .unwrap_or("-");
    format!("| {repo} | {} | {detail} |", result.status().as_str())
}
