//! Error types for the REST client core.

use thiserror::Error;

/// Errors that can occur when using the REST client core.
#[derive(Debug, Error)]
pub enum RestClientError {
    /// A caller supplied an invalid argument to a builder operation.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected argument
        message: String,
    },

    /// Error occurred while constructing the underlying HTTP client.
    #[error("HTTP client construction failed: {0}")]
    RequestError(#[from] reqwest::Error),
}

impl RestClientError {
    /// Creates a new `InvalidArgument` error with the given message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
