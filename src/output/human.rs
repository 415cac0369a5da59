//! Human-readable report output.
//!
//! One line per violation in the stable format
//! `[{line}:{col}] {severity} {rule_id} {message}`. Downstream tooling
//! parses these lines; keep them byte-for-byte.

use std::io::Write;

use super::ReportFormatter;
use crate::violation::Violation;

/// Formats violations as stable report lines.
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, violations: &[Violation], writer: &mut W) -> std::io::Result<()> {
        for violation in violations {
            writeln!(writer, "{}", violation.render())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{RuleId, Severity};
    use crate::tree::Pos;

    #[test]
    fn renders_stable_lines() {
        let violations = vec![
            Violation::new(
                RuleId::new("semantic-unused-component"),
                Severity::Warning,
                "component #/components/schemas/Orphan is never referenced",
                Pos::new(6, 5),
            ),
            Violation::new(
                RuleId::new("style-operation-id"),
                Severity::Hint,
                "operation GET /pets has no operationId",
                Pos::new(4, 5),
            ),
        ];

        let mut output = Vec::new();
        HumanFormatter::new().format(&violations, &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(
            output,
            "[6:5] warning semantic-unused-component component #/components/schemas/Orphan is never referenced\n\
             [4:5] hint style-operation-id operation GET /pets has no operationId\n"
        );
    }

    #[test]
    fn empty_report_is_empty() {
        let mut output = Vec::new();
        HumanFormatter::new().format(&[], &mut output).unwrap();
        assert!(output.is_empty());
    }
}
