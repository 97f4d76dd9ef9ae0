//! Zoom and value dependent line styling
//!
//! Contour lines at coarser value intervals are more significant and stay
//! visible at every zoom; finer intervals fade or disappear as the view
//! zooms out. Resolution is a total function of the line tags and the zoom
//! level, recomputed per render pass, so it never reads ambient view state.

use crate::document::LineTags;

/// Color encoding for lines that are hidden at the current zoom.
///
/// Hidden lines keep their computed width so the host renderer can still
/// hit-test them; they are encoded transparent rather than omitted.
pub const TRANSPARENT: &str = "rgba(0, 0, 0, 0)";

/// Width multipliers per significance tier
const MAJOR_FACTOR: f64 = 2.5;
const SUB_MAJOR_FACTOR: f64 = 1.5;
const MID_NEAR_FACTOR: f64 = 0.5;
const MID_FAR_FACTOR: f64 = 1.0 / 1.2;
const MINOR_FACTOR: f64 = 0.4;

/// Dampening applied to every line when zoomed far out
const FAR_OUT_DAMPENING: f64 = 0.9;
const FAR_OUT_MAX_ZOOM: u8 = 8;

/// Normalization against the renderer's stroke-width units
const GLOBAL_WIDTH_SCALE: f64 = 0.7;

/// Tolerance for the value-interval divisibility test
const INTERVAL_EPSILON: f64 = 1e-6;

/// The resolved stroke for one feature at one zoom level.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDecision {
    /// Stroke color; [`TRANSPARENT`] when the line is hidden
    pub stroke: String,
    /// Stroke width in renderer units
    pub width: f64,
}

impl StyleDecision {
    /// Returns true if the line is visibly drawn.
    pub fn is_visible(&self) -> bool {
        self.stroke != TRANSPARENT
    }
}

/// Resolves the stroke for a line at a zoom level.
///
/// Tier precedence is strict: a value divisible by several intervals takes
/// only the coarsest matching tier, never a stack of multipliers.
///
/// * multiple of 60: major line, always visible, width x2.5
/// * multiple of 30: sub-major, always visible, width x1.5
/// * multiple of 10: hidden at zoom <= 8, x0.5 at zoom 9, x(1/1.2) deeper
/// * multiple of 5: hidden at zoom <= 10, x0.4 deeper
/// * otherwise: minor line, base width
///
/// Independent of the tier, widths are dampened by x0.9 at zoom <= 8 and
/// finally scaled by the global x0.7 normalization factor.
pub fn style_for(tags: &LineTags, zoom: u8) -> StyleDecision {
    let value = tags.value;
    let mut width = tags.stroke_width;
    let mut visible = true;

    if is_multiple(value, 60.0) {
        width *= MAJOR_FACTOR;
    } else if is_multiple(value, 30.0) {
        width *= SUB_MAJOR_FACTOR;
    } else if is_multiple(value, 10.0) {
        if zoom <= 8 {
            visible = false;
        } else if zoom == 9 {
            width *= MID_NEAR_FACTOR;
        } else {
            width *= MID_FAR_FACTOR;
        }
    } else if is_multiple(value, 5.0) {
        if zoom <= 10 {
            visible = false;
        } else {
            width *= MINOR_FACTOR;
        }
    }

    if zoom <= FAR_OUT_MAX_ZOOM {
        width *= FAR_OUT_DAMPENING;
    }
    width *= GLOBAL_WIDTH_SCALE;

    StyleDecision {
        stroke: if visible {
            tags.stroke.clone()
        } else {
            TRANSPARENT.to_string()
        },
        width,
    }
}

fn is_multiple(value: f64, interval: f64) -> bool {
    let remainder = (value % interval).abs();
    remainder < INTERVAL_EPSILON || interval - remainder < INTERVAL_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(value: f64) -> LineTags {
        LineTags {
            value,
            stroke: "red".to_string(),
            stroke_width: 2.0,
            extra: serde_json::Map::new(),
        }
    }

    fn assert_width(decision: &StyleDecision, expected: f64) {
        assert!(
            (decision.width - expected).abs() < 1e-9,
            "width {} != expected {}",
            decision.width,
            expected
        );
    }

    // ===== Tier precedence =====

    #[test]
    fn test_multiple_of_60_takes_only_major_tier() {
        // 60 is divisible by 30 and 10 as well; only the x2.5 tier applies
        for zoom in 0..=18 {
            let decision = style_for(&tags(60.0), zoom);
            let dampening = if zoom <= 8 { 0.9 } else { 1.0 };
            assert_width(&decision, 2.0 * 2.5 * dampening * 0.7);
            assert!(decision.is_visible());
            assert_eq!(decision.stroke, "red");
        }
    }

    #[test]
    fn test_multiple_of_30_visible_at_every_zoom() {
        for zoom in 0..=18 {
            let decision = style_for(&tags(30.0), zoom);
            assert!(decision.is_visible());
        }
    }

    #[test]
    fn test_minor_value_gets_no_tier_multiplier() {
        // 7 matches no interval; width is base x dampening x global scale
        let decision = style_for(&tags(7.0), 12);
        assert_width(&decision, 2.0 * 0.7);
        assert!(decision.is_visible());
    }

    // ===== Multiple-of-10 zoom boundaries =====

    #[test]
    fn test_value_10_hidden_at_zoom_8() {
        let decision = style_for(&tags(10.0), 8);
        assert!(!decision.is_visible());
        assert_eq!(decision.stroke, TRANSPARENT);
        // Width still computed for hit testing: base x 0.9 x 0.7
        assert_width(&decision, 2.0 * 0.9 * 0.7);
    }

    #[test]
    fn test_value_10_half_width_at_zoom_9() {
        let decision = style_for(&tags(10.0), 9);
        assert!(decision.is_visible());
        assert_width(&decision, 2.0 * 0.5 * 0.7);
    }

    #[test]
    fn test_value_10_reduced_at_zoom_10() {
        let decision = style_for(&tags(10.0), 10);
        assert!(decision.is_visible());
        assert_width(&decision, 2.0 * (1.0 / 1.2) * 0.7);
    }

    // ===== Multiple-of-5 zoom boundaries =====

    #[test]
    fn test_value_5_hidden_at_zoom_10() {
        let decision = style_for(&tags(5.0), 10);
        assert!(!decision.is_visible());
    }

    #[test]
    fn test_value_5_thin_at_zoom_11() {
        let decision = style_for(&tags(5.0), 11);
        assert!(decision.is_visible());
        assert_width(&decision, 2.0 * 0.4 * 0.7);
    }

    // ===== Dampening and normalization =====

    #[test]
    fn test_far_out_dampening_applies_to_minor_lines() {
        let decision = style_for(&tags(7.0), 8);
        assert_width(&decision, 2.0 * 0.9 * 0.7);
    }

    #[test]
    fn test_no_dampening_above_zoom_8() {
        let decision = style_for(&tags(30.0), 12);
        assert_width(&decision, 2.0 * 1.5 * 0.7);
    }

    #[test]
    fn test_value_30_width_at_zoom_12() {
        // 2 x 1.5 x 0.7 = 2.1
        let decision = style_for(&tags(30.0), 12);
        assert_width(&decision, 2.1);
        assert_eq!(decision.stroke, "red");
    }

    // ===== Divisibility tolerance =====

    #[test]
    fn test_float_noise_still_matches_interval() {
        let decision = style_for(&tags(29.9999999), 12);
        assert_width(&decision, 2.0 * 1.5 * 0.7);
    }

    #[test]
    fn test_negative_values_match_intervals() {
        // Depth contours below a datum carry negative values
        let decision = style_for(&tags(-60.0), 12);
        assert_width(&decision, 2.0 * 2.5 * 0.7);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let a = style_for(&tags(10.0), 9);
        let b = style_for(&tags(10.0), 9);
        assert_eq!(a, b);
    }
}
