//! Index configuration and query result types

use crate::document::{GeometryKind, LineTags};
use std::sync::Arc;

/// Logical units per tile edge in tile-local coordinate space
pub const DEFAULT_EXTENT: u32 = 4096;

/// Clip buffer around each tile, in tile-local units
pub const DEFAULT_BUFFER: u32 = 64;

/// Direction-change threshold for vertex dropping, in degrees
pub const DEFAULT_MIN_SIMPLIFY_ANGLE: f64 = 2.0;

/// Zoom level at and above which simplification is disabled
pub const SIMPLIFY_MAX_ZOOM: u8 = 14;

/// Configuration for a [`super::ContourTileIndex`].
///
/// # Example
///
/// ```
/// use contourlayer::index::IndexConfig;
///
/// let config = IndexConfig::new()
///     .with_extent(8192)
///     .with_min_simplify_angle(1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IndexConfig {
    /// Logical units per tile edge
    pub extent: u32,
    /// Clip buffer around each tile, in the same units as `extent`
    pub buffer: u32,
    /// Base vertex-dropping angle in degrees; scaled up at low zoom
    pub min_simplify_angle: f64,
}

impl IndexConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self {
            extent: DEFAULT_EXTENT,
            buffer: DEFAULT_BUFFER,
            min_simplify_angle: DEFAULT_MIN_SIMPLIFY_ANGLE,
        }
    }

    /// Sets the logical tile extent.
    pub fn with_extent(mut self, extent: u32) -> Self {
        self.extent = extent;
        self
    }

    /// Sets the clip buffer width.
    pub fn with_buffer(mut self, buffer: u32) -> Self {
        self.buffer = buffer;
        self
    }

    /// Sets the base simplification angle in degrees. Zero disables
    /// simplification at every zoom level.
    pub fn with_min_simplify_angle(mut self, degrees: f64) -> Self {
        self.min_simplify_angle = degrees;
        self
    }

    /// Returns the vertex-dropping angle for a zoom level.
    ///
    /// The base angle is scaled by the distance below [`SIMPLIFY_MAX_ZOOM`],
    /// so far-out tiles drop more aggressively; at that zoom and deeper the
    /// geometry is returned unsimplified.
    pub fn simplify_angle_for_zoom(&self, zoom: u8) -> f64 {
        if zoom >= SIMPLIFY_MAX_ZOOM {
            return 0.0;
        }
        self.min_simplify_angle * f64::from(SIMPLIFY_MAX_ZOOM - zoom)
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// One index query result: clipped geometry for a single record within a
/// single tile, in tile-local coordinates.
///
/// `parts` keeps one level of nesting. The kind code plus the outer length
/// fully determine the reconstructed shape: length 1 is a single-part
/// geometry, anything longer is multi-part, e.g. one original line clipped
/// into several disjoint runs through the tile.
#[derive(Debug, Clone)]
pub struct EncodedTileRecord {
    pub kind: GeometryKind,
    pub parts: Vec<Vec<[f64; 2]>>,
    pub tags: Arc<LineTags>,
}
