//! Error types for the decision core

use thiserror::Error;

/// Errors raised by the decision core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdvisoryError {
    #[error("Invalid input for {field}: {message}")]
    InvalidInput { field: String, message: String },

    #[error("Rule catalog has already been installed")]
    CatalogAlreadyInstalled,

    #[error("Rule catalog error: {0}")]
    Catalog(String),
}

impl AdvisoryError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        AdvisoryError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for the decision core
pub type AdvisoryResult<T> = Result<T, AdvisoryError>;
