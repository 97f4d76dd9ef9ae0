//! Host rendering layer contract

use crate::feature::Feature;
use crate::source::ContourTileSource;
use crate::style::{style_for, StyleDecision};
use std::sync::Arc;

/// Identifier the host hands back for a registered layer.
pub type LayerId = u64;

/// One renderable contour layer: a tile source plus the station it renders.
///
/// The host calls [`tile_for_host`] (through the source) for geometry and
/// [`style`] per feature per render pass.
///
/// [`tile_for_host`]: ContourTileSource::tile_for_host
/// [`style`]: ContourLayer::style
pub struct ContourLayer {
    station_id: String,
    source: Arc<ContourTileSource>,
}

impl ContourLayer {
    /// Creates a layer for a station over a built tile source.
    pub fn new(station_id: impl Into<String>, source: Arc<ContourTileSource>) -> Self {
        Self {
            station_id: station_id.into(),
            source,
        }
    }

    /// Returns the station this layer renders.
    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    /// Returns the tile source backing this layer.
    pub fn source(&self) -> &Arc<ContourTileSource> {
        &self.source
    }

    /// Resolves the stroke for one feature at the ambient zoom level.
    ///
    /// Zoom is an explicit argument; the layer never reads view state.
    pub fn style(&self, feature: &Feature, zoom: u8) -> StyleDecision {
        style_for(&feature.tags, zoom)
    }
}

/// Registry of tile layers owned by the host map component.
///
/// The manager registers one layer per active contour set and removes the
/// previous one on a station switch. Implementations are expected to make
/// `add_layer` and `remove_layer` cheap; actual drawing happens elsewhere.
pub trait TileLayerHost: Send + Sync {
    /// Registers a layer and returns its handle.
    fn add_layer(&self, layer: ContourLayer) -> LayerId;

    /// Removes a previously registered layer. Unknown ids are ignored.
    fn remove_layer(&self, id: LayerId);
}
