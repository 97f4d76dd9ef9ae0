//! Contour document model and wire-format parsing
//!
//! A contour document is the raw input of the pipeline: a collection of
//! geometry records, each carrying a kind code, a coordinate sequence (or a
//! sequence of sequences for multi-part geometry), and a tag mapping with the
//! contour value and stroke styling. Documents are immutable once parsed and
//! are consumed whole by the tile index.

mod parser;
mod types;

pub use parser::parse_document;
pub use types::{ContourDocument, ContourRecord, DocumentError, GeometryKind, LineTags};
