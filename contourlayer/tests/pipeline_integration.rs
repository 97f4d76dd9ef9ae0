//! End-to-end pipeline integration tests
//!
//! Exercises the full document -> index -> tile source -> feature -> style
//! chain through the public API only, the way a host map component uses it.

use contourlayer::coord::{project, TileCoord};
use contourlayer::document::parse_document;
use contourlayer::feature::Geometry;
use contourlayer::index::{ContourTileIndex, IndexConfig};
use contourlayer::source::ContourTileSource;
use contourlayer::style::{style_for, TRANSPARENT};
use std::sync::Arc;

/// Tile at `zoom` containing the given lon/lat.
fn tile_containing(lon: f64, lat: f64, zoom: u8) -> TileCoord {
    let [wx, wy] = project(lon, lat);
    let scale = f64::from(1u32 << zoom);
    TileCoord::new(zoom, (wx * scale) as u32, (wy * scale) as u32)
}

fn source_for(body: &[u8]) -> ContourTileSource {
    let document = parse_document(body).expect("document should parse");
    let index = ContourTileIndex::build(&document, IndexConfig::default());
    ContourTileSource::new(Arc::new(index))
}

const RED_30_BODY: &[u8] = br#"{"features":[{"type":2,
    "coordinates":[[5.0,52.0],[5.01,52.01]],
    "tags":{"value":30,"stroke":"red","stroke-width":2}}]}"#;

// ===== Document to styled tile =====

#[test]
fn test_document_to_styled_feature() {
    let source = source_for(RED_30_BODY);

    let zoom = 12;
    let features = source.tile(tile_containing(5.005, 52.005, zoom));
    assert_eq!(features.len(), 1);

    let feature = &features[0];
    match &feature.geometry {
        Geometry::LineString(points) => assert!(points.len() >= 2),
        other => panic!("Expected a LineString, got {:?}", other),
    }

    // value 30, base width 2, zoom 12: 2 x 1.5 x 0.7 = 2.1
    let decision = style_for(&feature.tags, zoom);
    assert_eq!(decision.stroke, "red");
    assert!(
        (decision.width - 2.1).abs() < 1e-9,
        "width was {}",
        decision.width
    );
}

#[test]
fn test_far_tile_is_empty() {
    let source = source_for(RED_30_BODY);
    let features = source.tile(tile_containing(-120.0, -30.0, 12));
    assert!(features.is_empty());
}

#[test]
fn test_hidden_line_is_transparent_not_omitted() {
    let body = br#"{"features":[{"type":2,
        "coordinates":[[5.0,52.0],[5.01,52.01]],
        "tags":{"value":10,"stroke":"blue","stroke-width":2}}]}"#;
    let source = source_for(body);

    let zoom = 8;
    let features = source.tile(tile_containing(5.005, 52.005, zoom));
    assert_eq!(features.len(), 1, "hidden lines still reach the renderer");

    let decision = style_for(&features[0].tags, zoom);
    assert_eq!(decision.stroke, TRANSPARENT);
    assert!(!decision.is_visible());
    assert!(decision.width > 0.0, "hidden lines keep a hit-test width");
}

// ===== Tile cache =====

#[test]
fn test_re_render_reuses_cached_tile() {
    let source = source_for(RED_30_BODY);
    let coord = tile_containing(5.005, 52.005, 12);

    let first = source.tile(coord);
    let second = source.tile(coord);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(source.cached_tiles(), 1);
}

#[test]
fn test_host_addressing_matches_canonical() {
    let source = source_for(RED_30_BODY);
    let coord = tile_containing(5.005, 52.005, 12);

    let canonical = source.tile(coord);
    let via_host = source.tile_for_host(-12, coord.x, coord.y);
    assert!(Arc::ptr_eq(&canonical, &via_host));
}

// ===== Multi-part reconstruction through the pipeline =====

#[test]
fn test_line_split_by_tile_reconstructs_multi() {
    // V shape dipping far south of its endpoints: the covering tile sees
    // two disjoint runs of the same line
    let body = br#"{"features":[{"type":2,
        "coordinates":[[5.0,52.3],[5.1,51.7],[5.2,52.3]],
        "tags":{"value":60,"stroke":"black","stroke-width":1}}]}"#;
    let source = source_for(body);

    let features = source.tile(tile_containing(5.0, 52.3, 10));
    assert_eq!(features.len(), 1);
    match &features[0].geometry {
        Geometry::MultiLineString(parts) => assert_eq!(parts.len(), 2),
        other => panic!("Expected a MultiLineString, got {:?}", other),
    }
}

#[test]
fn test_tile_local_coordinates_within_buffered_extent() {
    let source = source_for(RED_30_BODY);
    let features = source.tile(tile_containing(5.005, 52.005, 14));
    assert!(!features.is_empty());

    let low = -64.0 - 1e-6;
    let high = 4096.0 + 64.0 + 1e-6;
    for feature in features.iter() {
        if let Geometry::LineString(points) = &feature.geometry {
            for p in points {
                assert!(p[0] >= low && p[0] <= high, "x out of range: {}", p[0]);
                assert!(p[1] >= low && p[1] <= high, "y out of range: {}", p[1]);
            }
        }
    }
}
