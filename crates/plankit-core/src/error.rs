//! Error types shared across the Plankit crates.

use thiserror::Error;

/// Errors produced while loading or validating plan documents.
#[derive(Error, Debug)]
pub enum Error {
    /// The document is not syntactically valid JSON, or its shape does not
    /// match the plan schema.
    #[error("invalid plan document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but violates a structural rule that cannot be
    /// repaired by normalization.
    #[error("invalid plan document: {reason}")]
    InvalidDocument {
        /// Human-readable description of the violation.
        reason: String,
    },
}

impl Error {
    pub fn invalid_document(reason: impl Into<String>) -> Self {
        Error::InvalidDocument {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
