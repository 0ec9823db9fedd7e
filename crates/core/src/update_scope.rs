use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Which declaration of a coordinate an update targets.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UpdateScope {
    /// The `<parent>` block of the root POM
    Parent,
    /// A `<dependency>` or `<dependencyManagement>` entry, following property references
    Dependency,
}

impl Display for UpdateScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Parent => "parent",
                Self::Dependency => "dependency",
            }
        )
    }
}
