mod config;
mod rewrite;
mod update;

pub use config::ConfigArgs;
pub use config::handle_config;
pub use rewrite::RewriteArgs;
pub use rewrite::handle_rewrite;
pub use update::UpdateArgs;
pub use update::handle_update;
