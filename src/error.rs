//! Error types for entity construction and tile rendering.

use thiserror::Error;

/// Errors raised by the infographic core.
///
/// Comparators and fact selection have no error path; only dinosaur
/// construction and the formatters can fail.
#[derive(Debug, Error)]
pub enum InfographicError {
    /// A required field is absent from a raw dinosaur record.
    #[error("missing attribute: {0}")]
    MissingAttribute(String),

    /// A required field is present but holds a value of the wrong shape.
    #[error("invalid attribute '{field}': expected {expected}")]
    InvalidAttribute {
        field: String,
        expected: &'static str,
    },

    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl InfographicError {
    /// Name of the offending field, for attribute errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            InfographicError::MissingAttribute(field) => Some(field),
            InfographicError::InvalidAttribute { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, InfographicError>;
