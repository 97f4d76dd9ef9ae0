//! Vertex dropping for dense contour lines
//!
//! Contour geometry is traced at a fixed resolution, so neighbouring
//! vertices are often nearly collinear. Dropping a vertex whenever the
//! direction change it introduces stays below a threshold angle removes most
//! of that density while keeping the visual shape. Endpoints are always
//! kept, so clipped parts still meet the tile edge exactly.

/// Simplifies one line part by dropping near-collinear interior vertices.
///
/// The incoming direction is measured from the last *kept* vertex, so the
/// accumulated deviation stays bounded by the threshold. A `min_angle_deg`
/// of zero or a part of two or fewer vertices is returned unchanged.
pub fn simplify_part(part: &[[f64; 2]], min_angle_deg: f64) -> Vec<[f64; 2]> {
    if min_angle_deg <= 0.0 || part.len() <= 2 {
        return part.to_vec();
    }

    let cos_threshold = min_angle_deg.to_radians().cos();
    let mut kept = Vec::with_capacity(part.len());
    kept.push(part[0]);
    let mut anchor = part[0];

    for i in 1..part.len() - 1 {
        let incoming = [part[i][0] - anchor[0], part[i][1] - anchor[1]];
        let outgoing = [part[i + 1][0] - part[i][0], part[i + 1][1] - part[i][1]];
        let incoming_len = (incoming[0] * incoming[0] + incoming[1] * incoming[1]).sqrt();
        let outgoing_len = (outgoing[0] * outgoing[0] + outgoing[1] * outgoing[1]).sqrt();

        // Zero-length step: duplicate vertex, always droppable
        if incoming_len == 0.0 || outgoing_len == 0.0 {
            continue;
        }

        let cos_angle =
            (incoming[0] * outgoing[0] + incoming[1] * outgoing[1]) / (incoming_len * outgoing_len);
        if cos_angle > cos_threshold {
            continue;
        }

        kept.push(part[i]);
        anchor = part[i];
    }

    kept.push(part[part.len() - 1]);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_angle_disables_simplification() {
        let part = [[0.0, 0.0], [0.5, 0.0001], [1.0, 0.0]];
        assert_eq!(simplify_part(&part, 0.0), part.to_vec());
    }

    #[test]
    fn test_short_parts_unchanged() {
        let part = [[0.0, 0.0], [1.0, 1.0]];
        assert_eq!(simplify_part(&part, 10.0), part.to_vec());
    }

    #[test]
    fn test_collinear_interior_vertex_dropped() {
        let part = [[0.0, 0.0], [0.5, 0.0], [1.0, 0.0]];
        let simplified = simplify_part(&part, 2.0);
        assert_eq!(simplified, vec![[0.0, 0.0], [1.0, 0.0]]);
    }

    #[test]
    fn test_sharp_corner_kept() {
        let part = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]];
        let simplified = simplify_part(&part, 2.0);
        assert_eq!(simplified, part.to_vec());
    }

    #[test]
    fn test_gentle_bend_dropped_below_threshold() {
        // Interior vertex deflects the direction by about 0.6 degrees
        let part = [[0.0, 0.0], [1.0, 0.01], [2.0, 0.0]];
        let simplified = simplify_part(&part, 2.0);
        assert_eq!(simplified, vec![[0.0, 0.0], [2.0, 0.0]]);
    }

    #[test]
    fn test_gentle_bend_kept_above_threshold() {
        let part = [[0.0, 0.0], [1.0, 0.01], [2.0, 0.0]];
        let simplified = simplify_part(&part, 0.1);
        assert_eq!(simplified, part.to_vec());
    }

    #[test]
    fn test_duplicate_vertices_dropped() {
        let part = [[0.0, 0.0], [0.5, 0.5], [0.5, 0.5], [1.0, 0.0]];
        let simplified = simplify_part(&part, 2.0);
        assert!(!simplified
            .windows(2)
            .any(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_endpoints_always_kept() {
        let part = [
            [0.0, 0.0],
            [0.25, 0.001],
            [0.5, 0.0],
            [0.75, 0.001],
            [1.0, 0.0],
        ];
        let simplified = simplify_part(&part, 5.0);
        assert_eq!(simplified.first(), Some(&[0.0, 0.0]));
        assert_eq!(simplified.last(), Some(&[1.0, 0.0]));
    }

    #[test]
    fn test_drift_is_bounded_by_anchor_tracking() {
        // Many tiny same-direction bends: each is below the threshold
        // relative to its neighbours, but the accumulated turn is 90
        // degrees, so some interior vertices must survive.
        let mut part = Vec::new();
        let steps = 90;
        for i in 0..=steps {
            let angle = (i as f64).to_radians();
            part.push([angle.cos(), angle.sin()]);
        }
        let simplified = simplify_part(&part, 5.0);
        assert!(
            simplified.len() > 2,
            "accumulated 90 degree turn must not collapse to a chord"
        );
    }
}
