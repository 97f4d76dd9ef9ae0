//! Provider error types

use std::fmt;

/// Errors that can occur while fetching a contour document.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// Transport-level failure or non-success HTTP status
    HttpError(String),
    /// The server answered but the response cannot be a contour document
    InvalidResponse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::HttpError(message) => {
                write!(f, "HTTP error: {}", message)
            }
            ProviderError::InvalidResponse(message) => {
                write!(f, "Invalid response: {}", message)
            }
        }
    }
}

impl std::error::Error for ProviderError {}
