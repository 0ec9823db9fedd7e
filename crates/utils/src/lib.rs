mod command_runner;
mod get_project_config;
mod git;
mod github;
mod write_summary;

pub use command_runner::{CommandOutput, CommandRunner, TokioCommandRunner};
pub use get_project_config::{PROJECT_CONFIG_PATH, get_project_config};
pub use git::{BOT_EMAIL, BOT_NAME, Git};
pub use github::{GitHub, PullRequest};
pub use write_summary::{append_summary, write_summary};

#[cfg(test)]
pub(crate) mod test_support;
