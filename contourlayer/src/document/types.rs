//! Contour document type definitions

use std::sync::Arc;
use thiserror::Error;

/// Geometry family of a contour record.
///
/// The wire format encodes this as a small integer kind code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    /// Kind code 1: point family (Point / MultiPoint)
    Point,
    /// Kind code 2: line family (LineString / MultiLineString)
    Line,
    /// Kind code 3: polygon family (Polygon / MultiPolygon)
    Polygon,
}

impl GeometryKind {
    /// Maps a wire kind code to a geometry family.
    ///
    /// Returns `None` for unrecognized codes; callers skip those records
    /// with a diagnostic rather than failing the whole document.
    pub fn from_code(code: u8) -> Option<GeometryKind> {
        match code {
            1 => Some(GeometryKind::Point),
            2 => Some(GeometryKind::Line),
            3 => Some(GeometryKind::Polygon),
            _ => None,
        }
    }

    /// Returns the wire kind code for this family.
    pub fn code(&self) -> u8 {
        match self {
            GeometryKind::Point => 1,
            GeometryKind::Line => 2,
            GeometryKind::Polygon => 3,
        }
    }
}

/// Typed tag mapping carried by every contour record.
///
/// The three required keys are validated at parse time; anything else the
/// producer attached is preserved untouched in `extra`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineTags {
    /// Contour value (elevation or travel-time level) of the line
    pub value: f64,
    /// Stroke color, passed through to the renderer unmodified
    pub stroke: String,
    /// Base stroke width before zoom/value scaling
    pub stroke_width: f64,
    /// Remaining tag entries, opaque to the pipeline
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One geometry record of a contour document, in lon/lat coordinates.
///
/// `parts` always has one level of nesting: a single-part geometry is a
/// one-element outer vector. Tags are shared behind an `Arc` so tile records
/// and reconstructed features can reference them without copying.
#[derive(Debug, Clone)]
pub struct ContourRecord {
    pub kind: GeometryKind,
    pub parts: Vec<Vec<[f64; 2]>>,
    pub tags: Arc<LineTags>,
}

/// A parsed contour document, immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct ContourDocument {
    pub records: Vec<ContourRecord>,
}

impl ContourDocument {
    /// Returns the number of geometry records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the document has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Errors that can occur while parsing a contour document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The body parsed as JSON but violates the document structure,
    /// typically a missing or mistyped required tag.
    #[error("malformed contour document: {reason}")]
    MalformedDocument { reason: String },

    /// The body is not valid JSON at all.
    #[error("contour document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
