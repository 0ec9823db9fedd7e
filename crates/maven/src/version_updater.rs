use pombump_core::Coordinate;
use regex::Regex;
use std::{
    iter,
    path::{Path, PathBuf},
    sync::LazyLock,
};
use tracing::{debug, info, warn};

use crate::{PomDocuments, property::find_property_definition, validate_version::accept_target_version};

static PROPERTY_REFERENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\$\{(.+)\}$").expect("hardcoded regex must compile")
});

/// A single POM whose version element was rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRewrite {
    pub content: String,
    pub old_version: String,
}

/// Changed POM files produced by one update, together with the version they moved away from.
///
/// Only files whose content actually changed are listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomUpdate {
    old_version: String,
    files: PomDocuments,
}

impl PomUpdate {
    #[must_use]
    pub fn single(path: PathBuf, rewrite: VersionRewrite) -> Self {
        Self {
            old_version: rewrite.old_version,
            files: PomDocuments::from([(path, rewrite.content)]),
        }
    }

    #[must_use]
    pub fn old_version(&self) -> &str {
        &self.old_version
    }

    #[must_use]
    pub const fn files(&self) -> &PomDocuments {
        &self.files
    }

    #[must_use]
    pub fn into_files(self) -> PomDocuments {
        self.files
    }
}

/// `<parent>` with group, artifact and version children in that order
fn parent_pattern(coordinate: &Coordinate) -> Option<Regex> {
    compile(&format!(
        r"(<parent>\s*<groupId>{}</groupId>\s*<artifactId>{}</artifactId>\s*<version>)([^<]+)(</version>)",
        regex::escape(coordinate.group_id()),
        regex::escape(coordinate.artifact_id()),
    ))
}

/// `<dependency>` with group and artifact, then any simple sibling elements or comments
/// (`<type>`, `<scope>`, ...) before the version
fn dependency_pattern(coordinate: &Coordinate) -> Option<Regex> {
    compile(&format!(
        r"(?s)(<dependency>\s*<groupId>{}</groupId>\s*<artifactId>{}</artifactId>\s*(?:(?:<!--.*?-->|<[^v/!][^<]*</[^<]*>)\s*)*<version>)([^<]+)(</version>)",
        regex::escape(coordinate.group_id()),
        regex::escape(coordinate.artifact_id()),
    ))
}

pub(crate) fn property_pattern(name: &str) -> Option<Regex> {
    let name = regex::escape(name);
    compile(&format!(r"(<{name}>)([^<]+)(</{name}>)"))
}

fn compile(pattern: &str) -> Option<Regex> {
    Regex::new(pattern)
        .inspect_err(|e| warn!("Failed to build POM pattern: {e}"))
        .ok()
}

/// Decide whether `old_version` may be replaced by `new_version`
fn is_replaceable(old_version: &str, new_version: &str, what: &str) -> bool {
    if old_version == new_version {
        debug!("{what} already at {new_version}");
        return false;
    }
    if old_version.contains("SNAPSHOT") {
        info!("Skipping SNAPSHOT {what}: {old_version}");
        return false;
    }
    true
}

/// Replace capture group 2 of the first match by splicing `new_version` between byte offsets.
///
/// The new version is never interpreted as a replacement template.
fn rewrite_first(
    pattern: &Regex,
    content: &str,
    new_version: &str,
    what: &str,
) -> Option<VersionRewrite> {
    let version = pattern.captures(content)?.get(2)?;
    let old_version = version.as_str().trim();
    if !is_replaceable(old_version, new_version, what) {
        return None;
    }
    let mut updated = String::with_capacity(content.len() + new_version.len());
    updated.push_str(&content[..version.start()]);
    updated.push_str(new_version);
    updated.push_str(&content[version.end()..]);
    Some(VersionRewrite {
        content: updated,
        old_version: old_version.to_string(),
    })
}

/// Update the version of the `<parent>` block matching `coordinate`.
///
/// Returns `None` when nothing matches, the version is already current, the current version is a
/// SNAPSHOT, or `new_version` is not a valid version string.
#[must_use]
pub fn update_parent_version(
    content: &str,
    coordinate: &Coordinate,
    new_version: &str,
) -> Option<VersionRewrite> {
    if !accept_target_version(new_version) {
        return None;
    }
    rewrite_first(
        &parent_pattern(coordinate)?,
        content,
        new_version,
        "parent version",
    )
}

/// Update the version of the dependency matching `coordinate` declared in `path`.
///
/// A literal version is rewritten in place. A `${name}` reference is left as is and the property
/// definition is rewritten instead, looked up in `path` first and then in `documents` in order.
#[must_use]
pub fn update_dependency_version(
    path: &Path,
    content: &str,
    coordinate: &Coordinate,
    new_version: &str,
    documents: &PomDocuments,
) -> Option<PomUpdate> {
    if !accept_target_version(new_version) {
        return None;
    }
    let pattern = dependency_pattern(coordinate)?;
    let declared = pattern.captures(content)?.get(2)?.as_str().trim();

    if let Some(reference) = PROPERTY_REFERENCE_PATTERN.captures(declared) {
        let name = reference.get(1)?.as_str();
        debug!("{coordinate} in {} uses property {name}", path.display());
        let search_order = iter::once((path, content)).chain(
            documents
                .iter()
                .filter(|(other, _)| other.as_path() != path)
                .map(|(other, text)| (other.as_path(), text.as_str())),
        );
        return rewrite_property(search_order, name, new_version);
    }

    let rewrite = rewrite_first(&pattern, content, new_version, "dependency version")?;
    Some(PomUpdate::single(path.to_path_buf(), rewrite))
}

/// Rewrite the property `name` in the first of `documents` that defines it.
#[must_use]
pub fn update_property_version(
    documents: &PomDocuments,
    name: &str,
    new_version: &str,
) -> Option<PomUpdate> {
    if !accept_target_version(new_version) {
        return None;
    }
    rewrite_property(
        documents
            .iter()
            .map(|(path, text)| (path.as_path(), text.as_str())),
        name,
        new_version,
    )
}

fn rewrite_property<'a>(
    documents: impl IntoIterator<Item = (&'a Path, &'a str)>,
    name: &str,
    new_version: &str,
) -> Option<PomUpdate> {
    let Some(definition) = find_property_definition(documents, name) else {
        warn!("Property {name} not found in any POM file");
        return None;
    };
    let rewrite = rewrite_first(
        &property_pattern(name)?,
        definition.content,
        new_version,
        "property value",
    )?;
    Some(PomUpdate::single(definition.path.to_path_buf(), rewrite))
}
