//! # pombump-core
//!
//! Core types shared by the pombump crates.
//!
//! Defines Maven coordinates, update requests and scopes, the result record printed for
//! workflow consumption, and the consumer repository configuration read from
//! `.github/project.yml`.

pub mod config;
pub mod coordinate;
pub mod update_request;
pub mod update_result;
pub mod update_scope;

pub use config::{GithubAutomation, ProjectConfig};
pub use coordinate::Coordinate;
pub use update_request::UpdateRequest;
pub use update_result::{UpdateResult, UpdateStatus};
pub use update_scope::UpdateScope;
