use clap::Args;
use pombump_core::{Coordinate, UpdateRequest};

use crate::options::ScopeOptions;

/// Coordinate, target version and scope shared by `rewrite` and `update`.
#[derive(Args, Debug, Clone)]
pub struct RequestOptions {
    /// Maven groupId (e.g. de.cuioss)
    #[arg(long)]
    pub group_id: String,

    /// Maven artifactId (e.g. cui-java-parent)
    #[arg(long)]
    pub artifact_id: String,

    /// New version (e.g. 1.4.4)
    #[arg(long)]
    pub new_version: String,

    /// 'parent' for the parent POM, 'dependency' for a dependency or its version property
    #[arg(long, value_enum)]
    pub scope: ScopeOptions,

    /// Rewrite this property directly instead of locating the dependency (dependency scope)
    #[arg(long)]
    pub version_property: Option<String>,
}

impl RequestOptions {
    #[must_use]
    pub fn to_request(&self) -> UpdateRequest {
        UpdateRequest::new(
            Coordinate::new(&self.group_id, &self.artifact_id),
            &self.new_version,
            self.scope.into(),
        )
        .with_version_property(self.version_property.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pombump_core::UpdateScope;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        request: RequestOptions,
    }

    #[test]
    fn test_request_options_to_request() {
        let cli = TestCli::parse_from([
            "test",
            "--group-id",
            "de.cuioss",
            "--artifact-id",
            "cui-http",
            "--new-version",
            "1.3.0",
            "--scope",
            "dependency",
            "--version-property",
            "version.cui.http",
        ]);
        let request = cli.request.to_request();
        assert_eq!(request.coordinate(), &Coordinate::new("de.cuioss", "cui-http"));
        assert_eq!(request.new_version(), "1.3.0");
        assert_eq!(request.scope(), UpdateScope::Dependency);
        assert_eq!(request.version_property(), Some("version.cui.http"));
    }

    #[test]
    fn test_request_options_rejects_invalid_scope() {
        let result = TestCli::try_parse_from([
            "test",
            "--group-id",
            "de.cuioss",
            "--artifact-id",
            "cui-java-parent",
            "--new-version",
            "1.4.4",
            "--scope",
            "invalid",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_request_options_requires_new_version() {
        let result = TestCli::try_parse_from([
            "test",
            "--group-id",
            "de.cuioss",
            "--artifact-id",
            "cui-java-parent",
            "--scope",
            "parent",
        ]);
        assert!(result.is_err());
    }
}
