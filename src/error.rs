//! Error types for oaslint operations.
//!
//! This module defines [`OaslintError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Lint findings are *not* errors: they are returned as
//!   [`Violation`](crate::violation::Violation) values regardless of severity.
//! - `OaslintError` is reserved for misuse of the API and for defects inside
//!   a rule body, so callers can render a best-effort report even under
//!   partial failure.
//! - Use `anyhow::Error` (via `OaslintError::Other`) for unexpected errors.

use thiserror::Error;

/// Core error type for oaslint operations.
#[derive(Debug, Error)]
pub enum OaslintError {
    /// The caller violated a fix usage contract, e.g. applying an interactive
    /// fix before all prompt inputs were supplied, or calling `set_input`
    /// with the wrong number of answers.
    #[error("usage contract violation: {message}")]
    UsageContract { message: String },

    /// A rule body failed internally. The runner isolates this per rule so
    /// one defective rule never aborts the whole catalog run.
    #[error("rule '{rule}' failed: {message}")]
    RuleExecution { rule: String, message: String },

    /// Configuration could not be loaded or parsed.
    #[error("invalid lint configuration: {message}")]
    ConfigError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OaslintError {
    /// Shorthand for a usage-contract failure.
    pub fn contract(message: impl Into<String>) -> Self {
        Self::UsageContract {
            message: message.into(),
        }
    }
}

/// Result type alias for oaslint operations.
pub type Result<T> = std::result::Result<T, OaslintError>;
