use anyhow::Result;

use clap::{Parser, Subcommand};

use crate::commands::{
    ConfigArgs, RewriteArgs, UpdateArgs, handle_config, handle_rewrite, handle_update,
};
pub mod commands;
pub mod consumer;
mod error;
pub mod options;

pub use error::UpdateFailed;

#[derive(Parser, Debug)]
#[command(
    name = "pombump",
    author,
    version,
    about = "Propagate released Maven versions into the POM files of consumer repositories",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Rewrite(RewriteArgs),
    Update(UpdateArgs),
    Config(ConfigArgs),
}

/// # Errors
/// Returns error if the selected command fails.
pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    match cli.command {
        Commands::Rewrite(args) => handle_rewrite(&args).await?,
        Commands::Update(args) => handle_update(&args).await?,
        Commands::Config(args) => handle_config(&args).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUEST: [&str; 8] = [
        "--group-id",
        "de.cuioss",
        "--artifact-id",
        "cui-java-parent",
        "--new-version",
        "1.4.4",
        "--scope",
        "parent",
    ];

    #[test]
    fn test_cli_parsing_rewrite() {
        let cli = Cli::parse_from(["pombump", "rewrite"].into_iter().chain(REQUEST));
        assert!(matches!(cli.command, Commands::Rewrite(_)));
    }

    #[test]
    fn test_cli_parsing_update() {
        let cli = Cli::parse_from(
            ["pombump", "update", "--repo", "cui-java-tools"]
                .into_iter()
                .chain(REQUEST),
        );
        let Commands::Update(args) = cli.command else {
            panic!("expected update command");
        };
        assert_eq!(args.repo, "cui-java-tools");
        assert_eq!(args.request.new_version, "1.4.4");
    }

    #[test]
    fn test_cli_parsing_config() {
        let cli = Cli::parse_from(["pombump", "config"]);
        assert!(matches!(cli.command, Commands::Config(_)));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["pombump"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_scope() {
        let result = Cli::try_parse_from([
            "pombump",
            "rewrite",
            "--group-id",
            "g",
            "--artifact-id",
            "a",
            "--new-version",
            "1.0",
            "--scope",
            "plugin",
        ]);
        assert!(result.is_err());
    }
}
