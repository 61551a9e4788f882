//! Error types for printable rendering.

use thiserror::Error;

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while turning an export into a printable document.
#[derive(Error, Debug)]
pub enum ReportError {
    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The export does not have the expected shape.
    #[error("unexpected export structure: {0}")]
    Structure(String),

    /// A component is missing a field its kind needs, or has one of the wrong type.
    #[error("question {index} ({kind}): {reason}")]
    Component {
        index: usize,
        kind: String,
        reason: String,
    },

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ReportError {
    /// Build a component error for the entity at `index`.
    pub fn component(index: usize, kind: impl Into<String>, reason: impl ToString) -> Self {
        ReportError::Component {
            index,
            kind: kind.into(),
            reason: reason.to_string(),
        }
    }
}
