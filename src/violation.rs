//! Lint violations.
//!
//! A [`Violation`] is the normal output of a policy check, regardless of
//! severity. It is created fresh per pass, anchored at a position that was
//! valid in the index at creation time, and may carry an optional
//! [`Fix`](crate::fix::Fix).

use crate::fix::Fix;
use crate::rule::{RuleId, Severity};
use crate::tree::Pos;

/// A reported policy failure with severity, location, and optional fix.
pub struct Violation {
    /// The rule that produced this violation.
    pub rule_id: RuleId,
    /// Effective severity (after any config override).
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Anchor position in the source document.
    pub pos: Pos,
    /// Optional remediation.
    pub fix: Option<Box<dyn Fix>>,
}

impl Violation {
    /// Create a new violation without a fix.
    pub fn new(
        rule_id: RuleId,
        severity: Severity,
        message: impl Into<String>,
        pos: Pos,
    ) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
            pos,
            fix: None,
        }
    }

    /// Attach a fix to this violation.
    pub fn with_fix(mut self, fix: Box<dyn Fix>) -> Self {
        self.fix = Some(fix);
        self
    }

    /// Whether this violation carries a fix.
    pub fn is_fixable(&self) -> bool {
        self.fix.is_some()
    }

    /// Render the stable report line.
    ///
    /// The format `[{line}:{col}] {severity} {rule_id} {message}` is a
    /// compatibility contract with downstream tooling; do not change it.
    pub fn render(&self) -> String {
        format!(
            "[{}:{}] {} {} {}",
            self.pos.line, self.pos.col, self.severity, self.rule_id, self.message
        )
    }
}

impl std::fmt::Debug for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Violation")
            .field("rule_id", &self.rule_id)
            .field("severity", &self.severity)
            .field("message", &self.message)
            .field("pos", &self.pos)
            .field("fix", &self.fix.as_ref().map(|fix| fix.description()))
            .finish()
    }
}
