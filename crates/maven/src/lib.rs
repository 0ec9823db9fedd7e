//! # pombump-maven
//!
//! Maven POM version rewriting.
//!
//! Locates a parent, dependency or property declaration by coordinate and rewrites its version
//! with pattern matching over the raw POM text. Every byte outside the targeted version element
//! is preserved. Property references (`${name}`) are followed across all POM files of a
//! checkout.

pub mod apply;
pub mod finder;
pub mod property;
pub mod validate_version;
pub mod version_updater;

use std::{collections::BTreeMap, path::PathBuf};

pub use apply::apply_update;
pub use finder::{POM_FILE_NAME, find_pom_files, load_pom_documents, write_pom_documents};
pub use property::{PropertyDefinition, find_property_definition};
pub use validate_version::is_valid_version;
pub use version_updater::{
    PomUpdate, VersionRewrite, update_dependency_version, update_parent_version,
    update_property_version,
};

/// POM file contents keyed by path, iterated in path order.
pub type PomDocuments = BTreeMap<PathBuf, String>;
