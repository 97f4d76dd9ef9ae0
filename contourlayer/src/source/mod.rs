//! Tile source adapter
//!
//! Bridges the host renderer's tile requests to the contour index. Each
//! request clips and reconstructs the features for one tile; the result is
//! cached per tile coordinate for the adapter's lifetime, so a re-render
//! after a pan does not re-query the index. No I/O happens at this layer,
//! the document behind the index is already resident.

use crate::coord::{TileCoord, MAX_ZOOM};
use crate::feature::{reconstruct, Feature};
use crate::index::ContourTileIndex;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::trace;

/// Per-tile feature source over one contour index.
///
/// Cheap to share behind an `Arc`; the cache is concurrent, so renderers
/// that request tiles from multiple threads need no external locking.
pub struct ContourTileSource {
    index: Arc<ContourTileIndex>,
    cache: DashMap<TileCoord, Arc<Vec<Feature>>>,
}

impl ContourTileSource {
    /// Creates an adapter over a built index with an empty tile cache.
    pub fn new(index: Arc<ContourTileIndex>) -> Self {
        Self {
            index,
            cache: DashMap::new(),
        }
    }

    /// Returns the feature set for a tile, computing and caching it on the
    /// first request.
    ///
    /// `zoom` is the canonical pyramid zoom (0 at the whole-world tile,
    /// growing as the view zooms in). An empty tile yields an empty, still
    /// cached, feature list.
    pub fn tile(&self, coord: TileCoord) -> Arc<Vec<Feature>> {
        if let Some(hit) = self.cache.get(&coord) {
            trace!(zoom = coord.zoom, x = coord.x, y = coord.y, "tile cache hit");
            return Arc::clone(&hit);
        }

        let features: Vec<Feature> = self
            .index
            .query(coord)
            .iter()
            .map(reconstruct)
            .collect();
        trace!(
            zoom = coord.zoom,
            x = coord.x,
            y = coord.y,
            features = features.len(),
            "tile computed"
        );

        let entry = self
            .cache
            .entry(coord)
            .or_insert_with(|| Arc::new(features));
        Arc::clone(&entry)
    }

    /// Returns the feature set for a tile addressed in the host renderer's
    /// tiling scheme.
    ///
    /// The host numbers pyramid levels downward from zero (0, -1, -2, ...),
    /// so the zoom index is negated exactly once at this boundary. All
    /// internal addressing uses canonical positive zoom.
    pub fn tile_for_host(&self, host_zoom: i32, x: u32, y: u32) -> Arc<Vec<Feature>> {
        let zoom = (-host_zoom).clamp(0, i32::from(MAX_ZOOM)) as u8;
        self.tile(TileCoord::new(zoom, x, y))
    }

    /// Returns the number of cached tiles.
    pub fn cached_tiles(&self) -> usize {
        self.cache.len()
    }
}
