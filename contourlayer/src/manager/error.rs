//! Layer manager error types

use crate::document::DocumentError;
use crate::provider::ProviderError;
use std::error::Error;
use std::fmt;

/// Errors surfaced by a contour set switch.
#[derive(Debug)]
pub enum LayerError {
    /// The document fetch failed; the previous contour set stays active.
    Fetch(ProviderError),
    /// The fetched body is not a valid contour document.
    Document(DocumentError),
    /// A newer switch was requested while this one was in flight; its
    /// result was discarded and the newer set is (or will be) active.
    Superseded,
}

impl fmt::Display for LayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerError::Fetch(err) => write!(f, "contour document fetch failed: {}", err),
            LayerError::Document(err) => write!(f, "contour document rejected: {}", err),
            LayerError::Superseded => write!(f, "contour set switch superseded by a newer request"),
        }
    }
}

impl Error for LayerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LayerError::Fetch(err) => Some(err),
            LayerError::Document(err) => Some(err),
            LayerError::Superseded => None,
        }
    }
}

impl From<ProviderError> for LayerError {
    fn from(err: ProviderError) -> Self {
        LayerError::Fetch(err)
    }
}

impl From<DocumentError> for LayerError {
    fn from(err: DocumentError) -> Self {
        LayerError::Document(err)
    }
}
