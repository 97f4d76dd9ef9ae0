//! Geometry type resolution
//!
//! Turns an encoded tile record back into a typed feature. The mapping is a
//! pure function of the record's kind code and the outer length of its
//! coordinate structure: one part yields the single-part shape of the
//! family, more than one yields the multi-part shape.

use crate::document::{GeometryKind, LineTags};
use crate::index::EncodedTileRecord;
use std::sync::Arc;

/// Typed geometry of a reconstructed feature, in tile-local coordinates.
///
/// Polygon parts carry a single ring each; the wire format has no
/// ring-grouping level, so a multi-part polygon record becomes one
/// single-ring polygon per part.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point([f64; 2]),
    MultiPoint(Vec<[f64; 2]>),
    LineString(Vec<[f64; 2]>),
    MultiLineString(Vec<Vec<[f64; 2]>>),
    Polygon(Vec<[f64; 2]>),
    MultiPolygon(Vec<Vec<[f64; 2]>>),
}

impl Geometry {
    /// Returns true for the multi-part shapes.
    pub fn is_multi_part(&self) -> bool {
        matches!(
            self,
            Geometry::MultiPoint(_) | Geometry::MultiLineString(_) | Geometry::MultiPolygon(_)
        )
    }
}

/// Renderable unit handed to the host layer: one typed geometry plus the
/// tags of the record it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub geometry: Geometry,
    pub tags: Arc<LineTags>,
}

/// Reconstructs a typed feature from an encoded tile record.
///
/// Pure and deterministic; tags are carried over by reference, never
/// inspected or modified here.
pub fn reconstruct(record: &EncodedTileRecord) -> Feature {
    let single = record.parts.len() == 1;
    let geometry = match (record.kind, single) {
        (GeometryKind::Point, true) => Geometry::Point(record.parts[0][0]),
        (GeometryKind::Point, false) => {
            Geometry::MultiPoint(record.parts.iter().map(|part| part[0]).collect())
        }
        (GeometryKind::Line, true) => Geometry::LineString(record.parts[0].clone()),
        (GeometryKind::Line, false) => Geometry::MultiLineString(record.parts.clone()),
        (GeometryKind::Polygon, true) => Geometry::Polygon(record.parts[0].clone()),
        (GeometryKind::Polygon, false) => Geometry::MultiPolygon(record.parts.clone()),
    };

    Feature {
        geometry,
        tags: Arc::clone(&record.tags),
    }
}
