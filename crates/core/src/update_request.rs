use serde::{Deserialize, Serialize};

use crate::{Coordinate, UpdateScope};

/// A single "move this coordinate to that version" instruction.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    coordinate: Coordinate,
    new_version: String,
    scope: UpdateScope,
    /// Property to rewrite directly instead of deriving it from the dependency declaration.
    /// Only meaningful for [`UpdateScope::Dependency`].
    #[serde(default)]
    version_property: Option<String>,
}

impl UpdateRequest {
    #[must_use]
    pub fn new(coordinate: Coordinate, new_version: impl Into<String>, scope: UpdateScope) -> Self {
        Self {
            coordinate,
            new_version: new_version.into(),
            scope,
            version_property: None,
        }
    }

    #[must_use]
    pub fn with_version_property(mut self, version_property: Option<String>) -> Self {
        self.version_property = version_property;
        self
    }

    #[must_use]
    pub const fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    #[must_use]
    pub fn new_version(&self) -> &str {
        &self.new_version
    }

    #[must_use]
    pub const fn scope(&self) -> UpdateScope {
        self.scope
    }

    #[must_use]
    pub fn version_property(&self) -> Option<&str> {
        self.version_property.as_deref()
    }

    /// Branch used for the consumer pull request, e.g. `chore/update-cui-java-parent-1.4.4`
    #[must_use]
    pub fn branch_name(&self) -> String {
        format!("{}{}", self.branch_prefix(), self.new_version)
    }

    /// Prefix shared by every update branch for this artifact, used to find stale pull requests
    #[must_use]
    pub fn branch_prefix(&self) -> String {
        format!("chore/update-{}-", self.coordinate.artifact_id())
    }
}
