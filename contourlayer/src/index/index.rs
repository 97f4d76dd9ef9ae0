//! Spatial index over a contour document

use super::clip::{clip_line, clip_ring};
use super::simplify::simplify_part;
use super::types::{EncodedTileRecord, IndexConfig};
use crate::coord::{project, TileCoord, WorldBounds};
use crate::document::{ContourDocument, GeometryKind, LineTags};
use std::sync::Arc;
use tracing::debug;

/// Minimum vertices for a clipped line part to survive
const MIN_LINE_PART: usize = 2;

/// Minimum vertices for a clipped polygon ring to survive
const MIN_RING_PART: usize = 3;

struct IndexedRecord {
    kind: GeometryKind,
    parts: Vec<Vec<[f64; 2]>>,
    bbox: WorldBounds,
    tags: Arc<LineTags>,
}

/// Build-once, query-many spatial index over one contour document.
///
/// Geometry is projected into unit-square world space at build time, with a
/// bounding box per record for cheap rejection. Each [`query`] clips the
/// intersecting records to the requested tile (plus a configurable buffer),
/// simplifies line geometry by a zoom-dependent angle, and translates the
/// result into tile-local coordinates at the configured extent.
///
/// The index is immutable after construction and safe to share across
/// threads behind an `Arc`.
///
/// [`query`]: ContourTileIndex::query
pub struct ContourTileIndex {
    records: Vec<IndexedRecord>,
    bounds: WorldBounds,
    config: IndexConfig,
}

impl ContourTileIndex {
    /// Builds the index from a parsed document.
    ///
    /// This is the one-time, synchronous cost paid per document; queries
    /// afterwards touch only the records whose bounding box intersects the
    /// requested tile.
    pub fn build(document: &ContourDocument, config: IndexConfig) -> Self {
        let mut records = Vec::with_capacity(document.len());
        let mut bounds = WorldBounds::empty();

        for record in &document.records {
            let mut bbox = WorldBounds::empty();
            let parts: Vec<Vec<[f64; 2]>> = record
                .parts
                .iter()
                .map(|part| {
                    part.iter()
                        .map(|position| {
                            let projected = project(position[0], position[1]);
                            bbox.extend(projected);
                            projected
                        })
                        .collect()
                })
                .collect();

            bounds.extend([bbox.min_x, bbox.min_y]);
            bounds.extend([bbox.max_x, bbox.max_y]);

            records.push(IndexedRecord {
                kind: record.kind,
                parts,
                bbox,
                tags: Arc::clone(&record.tags),
            });
        }

        debug!(records = records.len(), "contour tile index built");

        Self {
            records,
            bounds,
            config,
        }
    }

    /// Returns the index configuration.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Returns clipped, simplified records for one tile.
    ///
    /// Coordinates in the returned records are tile-local: `[0, extent]`
    /// spans the tile, with up to `buffer` units of overhang on each side.
    /// A tile outside all geometry yields an empty vector, never an error.
    pub fn query(&self, coord: TileCoord) -> Vec<EncodedTileRecord> {
        let tile = coord.world_bounds();
        let span = tile.max_x - tile.min_x;
        let pad = span * f64::from(self.config.buffer) / f64::from(self.config.extent);
        let clip_bounds = tile.padded(pad);

        if self.records.is_empty() || !self.bounds.intersects(&clip_bounds) {
            return Vec::new();
        }

        let simplify_angle = self.config.simplify_angle_for_zoom(coord.zoom);
        let mut results = Vec::new();

        for record in &self.records {
            if !record.bbox.intersects(&clip_bounds) {
                continue;
            }

            let parts = match record.kind {
                GeometryKind::Point => self.clip_points(record, &clip_bounds),
                GeometryKind::Line => self.clip_lines(record, &clip_bounds, simplify_angle),
                GeometryKind::Polygon => self.clip_polygons(record, &clip_bounds),
            };

            if parts.is_empty() {
                continue;
            }

            results.push(EncodedTileRecord {
                kind: record.kind,
                parts: self.to_tile_local(parts, &tile),
                tags: Arc::clone(&record.tags),
            });
        }

        results
    }

    /// Keeps the positions inside the clip bounds, one position per part so
    /// the outer length drives the single/multi distinction downstream.
    fn clip_points(&self, record: &IndexedRecord, clip_bounds: &WorldBounds) -> Vec<Vec<[f64; 2]>> {
        record
            .parts
            .iter()
            .flatten()
            .filter(|position| clip_bounds.contains(**position))
            .map(|position| vec![*position])
            .collect()
    }

    fn clip_lines(
        &self,
        record: &IndexedRecord,
        clip_bounds: &WorldBounds,
        simplify_angle: f64,
    ) -> Vec<Vec<[f64; 2]>> {
        let mut parts = Vec::new();
        for part in &record.parts {
            for clipped in clip_line(part, clip_bounds) {
                let simplified = simplify_part(&clipped, simplify_angle);
                if simplified.len() >= MIN_LINE_PART {
                    parts.push(simplified);
                }
            }
        }
        parts
    }

    fn clip_polygons(
        &self,
        record: &IndexedRecord,
        clip_bounds: &WorldBounds,
    ) -> Vec<Vec<[f64; 2]>> {
        record
            .parts
            .iter()
            .map(|ring| clip_ring(ring, clip_bounds))
            .filter(|ring| ring.len() >= MIN_RING_PART)
            .collect()
    }

    fn to_tile_local(
        &self,
        parts: Vec<Vec<[f64; 2]>>,
        tile: &WorldBounds,
    ) -> Vec<Vec<[f64; 2]>> {
        let span = tile.max_x - tile.min_x;
        let extent = f64::from(self.config.extent);
        parts
            .into_iter()
            .map(|part| {
                part.into_iter()
                    .map(|p| {
                        [
                            (p[0] - tile.min_x) / span * extent,
                            (p[1] - tile.min_y) / span * extent,
                        ]
                    })
                    .collect()
            })
            .collect()
    }
}
