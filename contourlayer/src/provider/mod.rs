//! Contour document fetching
//!
//! This module provides the HTTP abstraction and the provider that turns a
//! station id into the bytes of its contour document. The HTTP client sits
//! behind a trait so tests can inject mocks instead of a network.

mod document;
mod http;
mod types;

pub use document::DocumentProvider;
pub use http::{AsyncHttpClient, AsyncReqwestClient};
pub use types::ProviderError;

#[cfg(test)]
pub use http::tests::MockAsyncHttpClient;
