//! Wire-format parser for contour documents

use super::types::{ContourDocument, ContourRecord, DocumentError, GeometryKind, LineTags};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct WireDocument {
    features: Vec<WireRecord>,
}

#[derive(Debug, Deserialize)]
struct WireRecord {
    #[serde(rename = "type")]
    kind: u8,
    coordinates: WireCoords,
    tags: serde_json::Map<String, serde_json::Value>,
}

/// Coordinate payload: either one part or a list of parts.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireCoords {
    Single(Vec<[f64; 2]>),
    Multi(Vec<Vec<[f64; 2]>>),
}

impl WireCoords {
    fn into_parts(self) -> Vec<Vec<[f64; 2]>> {
        match self {
            WireCoords::Single(part) => vec![part],
            WireCoords::Multi(parts) => parts,
        }
    }
}

/// Parses a contour document from its wire-format bytes.
///
/// Records with an unrecognized kind code or without any coordinates are
/// skipped with a diagnostic. Missing or mistyped required tags (`value`,
/// `stroke`, `stroke-width`) fail the whole document, so a malformed
/// producer is caught at parse time instead of at render time.
///
/// # Arguments
///
/// * `bytes` - Raw HTTP response body
///
/// # Returns
///
/// The typed document, or a [`DocumentError`] describing the first violation
pub fn parse_document(bytes: &[u8]) -> Result<ContourDocument, DocumentError> {
    let wire: WireDocument = serde_json::from_slice(bytes)?;

    let mut records = Vec::with_capacity(wire.features.len());
    let mut point_count = 0usize;

    for (position, feature) in wire.features.into_iter().enumerate() {
        let kind = match GeometryKind::from_code(feature.kind) {
            Some(kind) => kind,
            None => {
                warn!(
                    record = position,
                    code = feature.kind,
                    "skipping record with unknown geometry kind code"
                );
                continue;
            }
        };

        let parts = feature.coordinates.into_parts();
        if parts.iter().all(|part| part.is_empty()) {
            warn!(record = position, "skipping record without coordinates");
            continue;
        }

        let tags = parse_tags(position, feature.tags)?;
        point_count += parts.iter().map(Vec::len).sum::<usize>();

        records.push(ContourRecord {
            kind,
            parts,
            tags: Arc::new(tags),
        });
    }

    info!(
        records = records.len(),
        points = point_count,
        "contour document parsed"
    );

    Ok(ContourDocument { records })
}

fn parse_tags(
    position: usize,
    mut raw: serde_json::Map<String, serde_json::Value>,
) -> Result<LineTags, DocumentError> {
    let value = required_number(position, &mut raw, "value")?;
    let stroke = required_string(position, &mut raw, "stroke")?;
    let stroke_width = required_number(position, &mut raw, "stroke-width")?;

    Ok(LineTags {
        value,
        stroke,
        stroke_width,
        extra: raw,
    })
}

fn required_number(
    position: usize,
    raw: &mut serde_json::Map<String, serde_json::Value>,
    key: &str,
) -> Result<f64, DocumentError> {
    match raw.remove(key) {
        Some(value) => value.as_f64().ok_or_else(|| DocumentError::MalformedDocument {
            reason: format!("record {}: tag '{}' is not a number", position, key),
        }),
        None => Err(DocumentError::MalformedDocument {
            reason: format!("record {}: tag '{}' missing", position, key),
        }),
    }
}

fn required_string(
    position: usize,
    raw: &mut serde_json::Map<String, serde_json::Value>,
    key: &str,
) -> Result<String, DocumentError> {
    match raw.remove(key) {
        Some(serde_json::Value::String(value)) => Ok(value),
        Some(_) => Err(DocumentError::MalformedDocument {
            reason: format!("record {}: tag '{}' is not a string", position, key),
        }),
        None => Err(DocumentError::MalformedDocument {
            reason: format!("record {}: tag '{}' missing", position, key),
        }),
    }
}
