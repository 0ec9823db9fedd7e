use clap::ValueEnum;
use pombump_core::UpdateScope;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeOptions {
    /// Update the parent POM version of the root pom.xml
    Parent,
    /// Update a dependency or dependencyManagement version, following property references
    Dependency,
}

impl From<ScopeOptions> for UpdateScope {
    fn from(value: ScopeOptions) -> Self {
        match value {
            ScopeOptions::Parent => Self::Parent,
            ScopeOptions::Dependency => Self::Dependency,
        }
    }
}
