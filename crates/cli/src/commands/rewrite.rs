use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use pombump_core::{UpdateRequest, UpdateScope};
use pombump_maven::{
    POM_FILE_NAME, PomUpdate, apply_update, find_pom_files, load_pom_documents,
    write_pom_documents,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::options::{FormatOptions, RequestOptions};

#[derive(Args, Debug)]
#[command(about = "Rewrite a parent or dependency version in a local Maven checkout")]
pub struct RewriteArgs {
    #[command(flatten)]
    pub request: RequestOptions,

    /// Checkout to rewrite (defaults to the current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Glob of pom.xml paths to skip, relative to --dir (repeatable)
    #[arg(long)]
    pub ignore: Vec<String>,

    #[arg(short, long)]
    pub dry_run: bool,

    #[arg(long, default_value = "stdout")]
    pub format: FormatOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RewriteReport {
    coordinate: String,
    new_version: String,
    old_version: Option<String>,
    files: Vec<String>,
    dry_run: bool,
}

impl RewriteReport {
    fn new(request: &UpdateRequest, root: &Path, update: Option<&PomUpdate>, dry_run: bool) -> Self {
        Self {
            coordinate: request.coordinate().to_string(),
            new_version: request.new_version().to_string(),
            old_version: update.map(|update| update.old_version().to_string()),
            files: update
                .map(|update| {
                    update
                        .files()
                        .keys()
                        .map(|path| display_path(root, path))
                        .collect()
                })
                .unwrap_or_default(),
            dry_run,
        }
    }
}

fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Rewrite the version of one coordinate in the POM files below `--dir`
///
/// # Errors
/// Returns error if no POM is found, POM files cannot be read or written, or an ignore pattern
/// is invalid.
pub async fn handle_rewrite(args: &RewriteArgs) -> Result<()> {
    let root = match &args.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let request = args.request.to_request();

    let pom_files = find_pom_files(&root, &args.ignore)?;
    if pom_files.is_empty() {
        bail!("No pom.xml found in {}", root.display());
    }
    let root_pom = root.join(POM_FILE_NAME);
    if request.scope() == UpdateScope::Parent && !pom_files.contains(&root_pom) {
        bail!("No root pom.xml in {}", root.display());
    }

    let documents = load_pom_documents(&pom_files).await?;
    let update = apply_update(&documents, &root_pom, &request);
    let report = RewriteReport::new(&request, &root, update.as_ref(), args.dry_run);
    let json = serde_json::to_string_pretty(&report)?;

    let Some(update) = update else {
        args.format.print(
            &format!("No changes needed for {}", request.coordinate()),
            &json,
        );
        return Ok(());
    };

    if let FormatOptions::Stdout = args.format {
        println!(
            "Updating {} from {} to {}",
            request.coordinate(),
            update.old_version().yellow(),
            request.new_version().green()
        );
        for file in &report.files {
            println!("  {file}");
        }
    }

    if args.dry_run {
        args.format
            .print("Dry run, no files will be written", &json);
        return Ok(());
    }

    write_pom_documents(update.files()).await?;
    args.format.print(
        &format!("Updated {} file(s)", report.files.len()),
        &json,
    );
    Ok(())
}
