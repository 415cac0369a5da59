//! Report formatters.
//!
//! Violations can be rendered for humans (the stable line contract) or as a
//! JSON report for machine consumers.

pub mod human;
pub mod json;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

use std::io::Write;

use crate::violation::Violation;

/// A formatter renders violations to a writer.
pub trait ReportFormatter {
    fn format<W: Write>(&self, violations: &[Violation], writer: &mut W) -> std::io::Result<()>;
}
