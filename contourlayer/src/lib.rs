//! ContourLayer - Elevation contour tile overlay pipeline
//!
//! This library turns a single large contour-line document into a zoomable,
//! per-tile styled map overlay. The raw geometry is indexed once, then served
//! tile-by-tile to a host renderer, with line weight and visibility resolved
//! from the contour value and the current zoom level.
//!
//! # High-Level API
//!
//! For most use cases, the [`manager`] module provides the orchestrating entry
//! point:
//!
//! ```ignore
//! use contourlayer::manager::ContourLayerManager;
//! use contourlayer::provider::{AsyncReqwestClient, DocumentProvider};
//!
//! let client = AsyncReqwestClient::new()?;
//! let provider = DocumentProvider::new(client, "https://data.example.com");
//! let manager = ContourLayerManager::new(provider, host);
//!
//! // Fetch, index, and activate the contour set for a station
//! manager.show_contours_for("ut").await?;
//! ```

pub mod coord;
pub mod document;
pub mod feature;
pub mod index;
pub mod logging;
pub mod manager;
pub mod provider;
pub mod source;
pub mod style;

/// Version of the ContourLayer library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
