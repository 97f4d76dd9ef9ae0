//! Contour tile index
//!
//! The index is built once, eagerly, from a full contour document and then
//! serves read-only tile queries for its lifetime. Geometry is projected to
//! unit-square world space at build time; each query clips and simplifies the
//! intersecting records for one tile and translates them into that tile's
//! local coordinate space at a fixed logical extent, independent of pixel
//! size, so the same structure serves every zoom level.

mod clip;
mod index;
mod simplify;
mod types;

pub use index::ContourTileIndex;
pub use types::{
    EncodedTileRecord, IndexConfig, DEFAULT_BUFFER, DEFAULT_EXTENT, DEFAULT_MIN_SIMPLIFY_ANGLE,
    SIMPLIFY_MAX_ZOOM,
};
