//! Contour layer lifecycle management
//!
//! The manager owns the fetch -> parse -> index -> register pipeline behind
//! a single operation, [`ContourLayerManager::show_contours_for`]. It
//! enforces two invariants:
//!
//! * exactly one contour set is registered with the host at a time, and
//! * when switches race, the most recently requested station wins,
//!   regardless of fetch completion order.
//!
//! The second invariant is guarded by a monotonically increasing request
//! token: a completion whose token is no longer current is discarded before
//! it touches host state.

mod error;
mod host;
mod state;

pub use error::LayerError;
pub use host::{ContourLayer, LayerId, TileLayerHost};
pub use state::MapState;

use crate::document::parse_document;
use crate::index::{ContourTileIndex, IndexConfig};
use crate::provider::{AsyncHttpClient, DocumentProvider};
use crate::source::ContourTileSource;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Orchestrates contour set switches against a host map.
///
/// Cheap to share behind an `Arc`; concurrent switch requests are safe and
/// resolve to the most recently issued one.
pub struct ContourLayerManager<C: AsyncHttpClient, H: TileLayerHost> {
    provider: DocumentProvider<C>,
    host: Arc<H>,
    index_config: IndexConfig,
    state: Mutex<MapState>,
    generation: AtomicU64,
}

impl<C: AsyncHttpClient, H: TileLayerHost> ContourLayerManager<C, H> {
    /// Creates a manager with the default index configuration.
    pub fn new(provider: DocumentProvider<C>, host: Arc<H>) -> Self {
        Self {
            provider,
            host,
            index_config: IndexConfig::default(),
            state: Mutex::new(MapState::new()),
            generation: AtomicU64::new(0),
        }
    }

    /// Overrides the index configuration used for newly built contour sets.
    pub fn with_index_config(mut self, config: IndexConfig) -> Self {
        self.index_config = config;
        self
    }

    /// Fetches, indexes, and activates the contour set for a station.
    ///
    /// On success the previously registered layers are removed and the new
    /// layer takes their place. On failure the previous contour set is left
    /// untouched. When a newer call is issued before this one completes,
    /// this one returns [`LayerError::Superseded`] without modifying host
    /// state.
    pub async fn show_contours_for(&self, station_id: &str) -> Result<(), LayerError> {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!(station = station_id, "switching contour set");

        let body = self.provider.fetch(station_id).await?;
        let document = parse_document(&body)?;
        let index = ContourTileIndex::build(&document, self.index_config.clone());
        let source = Arc::new(ContourTileSource::new(Arc::new(index)));
        let layer = ContourLayer::new(station_id, source);

        let mut state = self.state.lock().await;
        // Token check under the state lock: a newer call may have been
        // issued while this one was fetching
        if self.generation.load(Ordering::SeqCst) != token {
            debug!(station = station_id, "stale contour fetch discarded");
            return Err(LayerError::Superseded);
        }

        for id in state.take_all() {
            self.host.remove_layer(id);
        }
        let id = self.host.add_layer(layer);
        state.register(station_id, id);

        info!(station = station_id, records = document.len(), "contour set active");
        Ok(())
    }

    /// Returns the station of the active contour set, if any.
    pub async fn active_station(&self) -> Option<String> {
        self.state.lock().await.station_id().map(str::to_string)
    }

    /// Returns the number of layers currently registered with the host.
    pub async fn active_layer_count(&self) -> usize {
        self.state.lock().await.layer_count()
    }
}
