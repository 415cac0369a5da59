//! Server URL trailing-slash check.
//!
//! Server URLs are joined with path templates that always start with `/`, so
//! trailing slashes produce double-slash request URLs. Carries an automatic
//! fix that strips *all* trailing slashes, not just one.

use crate::config::LintConfig;
use crate::error::Result;
use crate::fix::transforms::{strip_trailing_slashes, ScalarRewriteFix};
use crate::index::DocumentIndex;
use crate::rule::{Category, Rule, RuleId, Severity};
use crate::violation::Violation;

/// Flags server URLs ending in one or more slashes.
pub struct ServerTrailingSlashRule;

impl Rule for ServerTrailingSlashRule {
    fn id(&self) -> RuleId {
        RuleId::new("style-server-trailing-slash")
    }

    fn name(&self) -> &str {
        "Server Trailing Slash"
    }

    fn description(&self) -> &str {
        "Server URLs must not end with a slash"
    }

    fn category(&self) -> Category {
        Category::Style
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, index: &DocumentIndex, _config: &LintConfig) -> Result<Vec<Violation>> {
        let mut violations = Vec::new();

        for server in &index.servers {
            // A bare "/" server URL is the relative-root form, leave it.
            if server.url.len() > 1 && server.url.ends_with('/') {
                violations.push(
                    Violation::new(
                        self.id(),
                        self.default_severity(),
                        format!("server URL '{}' has trailing slashes", server.url),
                        server.pos,
                    )
                    .with_fix(Box::new(ScalarRewriteFix::new(
                        server.url_handle,
                        server.url.clone(),
                        "remove trailing slashes from server URL",
                        strip_trailing_slashes,
                    ))),
                );
            }
        }

        Ok(violations)
    }
}
