use anyhow::Result;
use pombump_core::{ProjectConfig, UpdateRequest, UpdateResult, UpdateScope, UpdateStatus};
use pombump_maven::{
    POM_FILE_NAME, apply_update, find_pom_files, load_pom_documents, write_pom_documents,
};
use pombump_utils::{CommandRunner, Git, GitHub, get_project_config};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// One consumer repository to move onto a released version.
pub struct ConsumerUpdate<'a> {
    pub org: &'a str,
    pub repo: &'a str,
    pub request: &'a UpdateRequest,
    pub ignore: &'a [String],
}

impl ConsumerUpdate<'_> {
    fn full_repo(&self) -> String {
        format!("{}/{}", self.org, self.repo)
    }

    fn commit_message(&self, old_version: &str) -> String {
        format!(
            "chore: update {} from {old_version} to {}",
            self.request.coordinate().artifact_id(),
            self.request.new_version()
        )
    }

    fn pr_body(&self, old_version: &str) -> String {
        format!(
            "Updates `{}` from `{old_version}` to `{}`\n\nThis PR was automatically created by the release workflow.",
            self.request.coordinate(),
            self.request.new_version()
        )
    }
}

/// Clone the consumer into `work_dir`, rewrite its POMs and open a pull request.
///
/// Never fails: every problem ends up as an [`UpdateStatus::Error`] result so a batch over many
/// consumers can carry on.
pub async fn update_consumer(
    runner: &dyn CommandRunner,
    update: &ConsumerUpdate<'_>,
    work_dir: &Path,
) -> UpdateResult {
    let full_repo = update.full_repo();
    println!(
        "::group::Processing {full_repo} ({}: {})",
        update.request.scope(),
        update.request.coordinate()
    );
    let result = match run_update(runner, update, work_dir).await {
        Ok(result) => result,
        Err(e) => {
            warn!("Update of {full_repo} failed: {e:#}");
            UpdateResult::error(format!("{e:#}"))
        }
    };
    println!("::endgroup::");
    result
}

async fn run_update(
    runner: &dyn CommandRunner,
    update: &ConsumerUpdate<'_>,
    work_dir: &Path,
) -> Result<UpdateResult> {
    let full_repo = update.full_repo();
    let request = update.request;
    let github = GitHub::new(runner);
    let repo_dir = work_dir.join(update.repo);

    info!("Cloning {full_repo}...");
    let cloned = github.clone_repo(&full_repo, &repo_dir).await;
    if !cloned.success {
        warn!("Failed to clone {full_repo}: {}", cloned.stderr.trim());
        return Ok(UpdateResult::error(format!(
            "Clone failed: {}",
            cloned.stderr.trim()
        )));
    }

    let config = get_project_config(&repo_dir).await;

    let pom_files = find_pom_files(&repo_dir, update.ignore)?;
    if pom_files.is_empty() {
        warn!("No pom.xml found in {}", update.repo);
        return Ok(UpdateResult::error("No pom.xml found"));
    }
    let root_pom = repo_dir.join(POM_FILE_NAME);
    if request.scope() == UpdateScope::Parent && !pom_files.contains(&root_pom) {
        warn!("No root pom.xml in {}", update.repo);
        return Ok(UpdateResult::error("No root pom.xml"));
    }

    let documents = load_pom_documents(&pom_files).await?;
    let Some(pom_update) = apply_update(&documents, &root_pom, request) else {
        println!("No changes needed for {}", request.coordinate());
        github
            .close_stale_prs(
                &full_repo,
                &request.branch_prefix(),
                &format!(
                    "Closing: {} already uses {} {}.",
                    update.repo,
                    request.coordinate().artifact_id(),
                    request.new_version()
                ),
                None,
            )
            .await;
        return Ok(UpdateResult::no_changes());
    };

    let old_version = pom_update.old_version().to_string();
    println!(
        "Updating {} from {old_version} to {}",
        request.coordinate(),
        request.new_version()
    );
    write_pom_documents(pom_update.files()).await?;
    let changed_files = pom_update.files().keys().cloned().collect::<Vec<PathBuf>>();

    let branch = request.branch_name();
    let commit_message = update.commit_message(&old_version);
    let git = Git::new(runner, &repo_dir);
    git.checkout_new_branch(&branch).await?;
    git.configure_author().await?;
    git.add(&changed_files).await?;
    git.commit(&commit_message).await?;

    let result = open_pull_request(
        &github,
        &git,
        &full_repo,
        &repo_dir,
        &branch,
        &commit_message,
        &update.pr_body(&old_version),
        &config,
    )
    .await;

    if let Some(pr_url) = result.pr_url() {
        github
            .close_stale_prs(
                &full_repo,
                &request.branch_prefix(),
                &format!(
                    "Superseded by update to {}: {pr_url}",
                    request.new_version()
                ),
                Some(&branch),
            )
            .await;
    }
    Ok(result)
}

/// Push `branch`, open the pull request and enable auto-merge when the consumer allows it.
#[allow(clippy::too_many_arguments)]
async fn open_pull_request(
    github: &GitHub<'_>,
    git: &Git<'_>,
    full_repo: &str,
    repo_dir: &Path,
    branch: &str,
    title: &str,
    body: &str,
    config: &ProjectConfig,
) -> UpdateResult {
    info!("Pushing branch {branch}...");
    let pushed = git.push(branch).await;
    if !pushed.success {
        warn!("Failed to push: {}", pushed.stderr.trim());
        return UpdateResult::error(format!("Push failed: {}", pushed.stderr.trim()));
    }

    info!("Creating pull request...");
    let created = github
        .create_pr(full_repo, repo_dir, branch, title, body)
        .await;
    if !created.success {
        warn!("PR creation failed: {}", created.stderr.trim());
        return UpdateResult::error(format!("PR creation failed: {}", created.stderr.trim()));
    }
    let pr_url = created.stdout.trim().to_string();
    println!("PR created: {pr_url}");

    let status = if !config.auto_merge_enabled() {
        info!("Auto-merge disabled for {full_repo}, leaving PR open");
        UpdateStatus::PrCreated
    } else if github.enable_auto_merge(&pr_url).await {
        UpdateStatus::PrAutoMergeEnabled
    } else {
        UpdateStatus::PrCreated
    };
    UpdateResult::pull_request(status, pr_url)
}
