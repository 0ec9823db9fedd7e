use thiserror::Error;

/// A consumer update ended with an `error` result.
///
/// The result has already been reported on stdout; this only carries the exit status.
#[derive(Debug, Error)]
#[error("update of {repo} failed: {message}")]
pub struct UpdateFailed {
    pub repo: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_failed_display() {
        let error = UpdateFailed {
            repo: "cuioss/cui-java-tools".to_string(),
            message: "No pom.xml found".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "update of cuioss/cui-java-tools failed: No pom.xml found"
        );
    }

    #[test]
    fn test_update_failed_downcast_from_anyhow() {
        let error: anyhow::Error = UpdateFailed {
            repo: "r".to_string(),
            message: "m".to_string(),
        }
        .into();
        assert!(error.downcast_ref::<UpdateFailed>().is_some());
    }
}
