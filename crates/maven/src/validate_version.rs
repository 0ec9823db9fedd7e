use regex::Regex;
use std::sync::LazyLock;
use tracing::error;

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._-]+$").expect("hardcoded regex must compile")
});

/// Check that a version only contains letters, digits, `.`, `-` and `_`.
///
/// Target versions come from release payloads and are spliced into POM text, so anything that
/// could close an element (`<`, `>`), start a reference (`$`, `\`) or break a line is refused.
#[must_use]
pub fn is_valid_version(version: &str) -> bool {
    VERSION_PATTERN.is_match(version)
}

/// Guard run at the top of every rewrite entry point. Logs loudly, answers quietly.
pub(crate) fn accept_target_version(version: &str) -> bool {
    if is_valid_version(version) {
        return true;
    }
    error!(version = %version.escape_debug(), "Refusing invalid target version");
    false
}
