use pombump_core::{UpdateRequest, UpdateScope};
use std::path::Path;

use crate::{
    PomDocuments,
    validate_version::accept_target_version,
    version_updater::{
        PomUpdate, update_dependency_version, update_parent_version, update_property_version,
    },
};

/// Apply `request` to the POM files of one checkout.
///
/// Parent updates only look at `root_pom`. Dependency updates visit `documents` in order and stop
/// at the first one that yields a change, or rewrite `request.version_property()` directly when
/// set. Returns `None` when nothing needs to change.
#[must_use]
pub fn apply_update(
    documents: &PomDocuments,
    root_pom: &Path,
    request: &UpdateRequest,
) -> Option<PomUpdate> {
    let new_version = request.new_version();
    if !accept_target_version(new_version) {
        return None;
    }
    let coordinate = request.coordinate();

    match request.scope() {
        UpdateScope::Parent => {
            let content = documents.get(root_pom)?;
            let rewrite = update_parent_version(content, coordinate, new_version)?;
            Some(PomUpdate::single(root_pom.to_path_buf(), rewrite))
        }
        UpdateScope::Dependency => match request.version_property() {
            Some(name) => update_property_version(documents, name, new_version),
            None => documents.iter().find_map(|(path, content)| {
                update_dependency_version(path, content, coordinate, new_version, documents)
            }),
        },
    }
}
