//! JSON report output.

use std::io::Write;

use serde_json::json;

use super::ReportFormatter;
use crate::violation::Violation;

/// Formats violations as a JSON array.
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, violations: &[Violation], writer: &mut W) -> std::io::Result<()> {
        let entries: Vec<serde_json::Value> = violations
            .iter()
            .map(|v| {
                json!({
                    "rule": v.rule_id.0,
                    "severity": v.severity,
                    "message": v.message,
                    "line": v.pos.line,
                    "col": v.pos.col,
                    "fixable": v.is_fixable(),
                })
            })
            .collect();
        let report = serde_json::to_string_pretty(&entries)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        writeln!(writer, "{report}")
    }
}
