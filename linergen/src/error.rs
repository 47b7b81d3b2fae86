//! Error types for the linergen library.
//!
//! This module provides the error hierarchy for all operations in the
//! linergen library, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a linergen error.
///
/// # Examples
///
/// ```
/// use linergen::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("global: {}\n".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the linergen library.
///
/// Syntax problems in document text always surface as [`Error::Yaml`] and
/// abort the call; structural problems are accumulated separately in a
/// [`crate::ValidationResult`] and never truncated to the first violation.
#[derive(Debug, Error)]
pub enum Error {
    /// The document text is not well-formed YAML, or does not decode into
    /// the configuration schema.
    #[error("invalid YAML syntax: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An unsupported template name was requested.
    #[error("unknown template '{name}', supported templates: {supported}")]
    UnknownTemplate {
        /// The requested template name.
        name: String,
        /// Comma-separated list of supported template names.
        supported: &'static str,
    },

    /// An unsupported dialer kind was requested.
    #[error("unknown dialer kind '{kind}', supported kinds: {supported}")]
    UnknownDialerKind {
        /// The requested dialer kind.
        kind: String,
        /// Comma-separated list of supported dialer kinds.
        supported: &'static str,
    },

    /// A parameter with no usable default was absent.
    #[error("missing required parameter '{name}': {reason}")]
    MissingParameter {
        /// The parameter name.
        name: String,
        /// Why the parameter cannot be defaulted.
        reason: String,
    },

    /// A parameter bag did not deserialize into the selected request type.
    #[error("invalid parameters for template '{template}': {message}")]
    InvalidParams {
        /// The template the parameters were meant for.
        template: String,
        /// A description of the mismatch.
        message: String,
    },

    /// A single structural violation, for callers that need an error value
    /// rather than a full validation result.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field path that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The auth-table artifact could not be rendered.
    #[error("auth table error: {0}")]
    AuthTable(#[from] csv::Error),
}

impl From<crate::config::ValidationError> for Error {
    fn from(err: crate::config::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}
