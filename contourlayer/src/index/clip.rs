//! Geometry clipping against tile bounds

use crate::coord::WorldBounds;

/// Coincidence tolerance when stitching clipped segments back into runs
const STITCH_EPSILON: f64 = 1e-12;

/// Clips a polyline to a rectangle, splitting it into disjoint runs.
///
/// Each returned part is a contiguous run of the input line inside the
/// bounds. A line that leaves and re-enters the rectangle produces multiple
/// parts; a line entirely outside produces none.
pub fn clip_line(points: &[[f64; 2]], bounds: &WorldBounds) -> Vec<Vec<[f64; 2]>> {
    let mut parts: Vec<Vec<[f64; 2]>> = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();

    for window in points.windows(2) {
        match clip_segment(window[0], window[1], bounds) {
            Some((entry, exit)) => {
                let continues = current
                    .last()
                    .map(|last| coincident(*last, entry))
                    .unwrap_or(false);
                if !continues {
                    flush(&mut parts, &mut current);
                    current.push(entry);
                }
                current.push(exit);
            }
            None => flush(&mut parts, &mut current),
        }
    }
    flush(&mut parts, &mut current);

    parts
}

/// Clips one segment to the rectangle using Liang-Barsky parameter tests.
///
/// Returns the clipped endpoints, or `None` when the segment misses the
/// rectangle entirely.
fn clip_segment(a: [f64; 2], b: [f64; 2], bounds: &WorldBounds) -> Option<([f64; 2], [f64; 2])> {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;

    let edges = [
        (-dx, a[0] - bounds.min_x),
        (dx, bounds.max_x - a[0]),
        (-dy, a[1] - bounds.min_y),
        (dy, bounds.max_y - a[1]),
    ];

    for (p, q) in edges {
        if p == 0.0 {
            // Segment parallel to this edge: outside means no intersection
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                if r > t0 {
                    t0 = r;
                }
            } else {
                if r < t0 {
                    return None;
                }
                if r < t1 {
                    t1 = r;
                }
            }
        }
    }

    Some((
        [a[0] + t0 * dx, a[1] + t0 * dy],
        [a[0] + t1 * dx, a[1] + t1 * dy],
    ))
}

fn flush(parts: &mut Vec<Vec<[f64; 2]>>, current: &mut Vec<[f64; 2]>) {
    if current.len() >= 2 {
        parts.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

fn coincident(a: [f64; 2], b: [f64; 2]) -> bool {
    (a[0] - b[0]).abs() <= STITCH_EPSILON && (a[1] - b[1]).abs() <= STITCH_EPSILON
}

/// Clips a polygon ring to a rectangle with Sutherland-Hodgman passes.
///
/// The input ring may be open or closed; the output is open (first vertex
/// not repeated) and may be empty when the ring lies outside the rectangle.
pub fn clip_ring(ring: &[[f64; 2]], bounds: &WorldBounds) -> Vec<[f64; 2]> {
    let mut output: Vec<[f64; 2]> = ring.to_vec();
    if let Some(last) = output.last() {
        if let Some(first) = output.first() {
            if coincident(*first, *last) && output.len() > 1 {
                output.pop();
            }
        }
    }

    for edge in [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom] {
        if output.is_empty() {
            return output;
        }
        let input = std::mem::take(&mut output);
        let mut previous = input[input.len() - 1];
        for point in input {
            let point_inside = edge.inside(point, bounds);
            let previous_inside = edge.inside(previous, bounds);
            if point_inside {
                if !previous_inside {
                    output.push(edge.intersect(previous, point, bounds));
                }
                output.push(point);
            } else if previous_inside {
                output.push(edge.intersect(previous, point, bounds));
            }
            previous = point;
        }
    }

    output
}

#[derive(Clone, Copy)]
enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    fn inside(&self, p: [f64; 2], bounds: &WorldBounds) -> bool {
        match self {
            Edge::Left => p[0] >= bounds.min_x,
            Edge::Right => p[0] <= bounds.max_x,
            Edge::Top => p[1] >= bounds.min_y,
            Edge::Bottom => p[1] <= bounds.max_y,
        }
    }

    fn intersect(&self, a: [f64; 2], b: [f64; 2], bounds: &WorldBounds) -> [f64; 2] {
        let dx = b[0] - a[0];
        let dy = b[1] - a[1];
        match self {
            Edge::Left => {
                let t = (bounds.min_x - a[0]) / dx;
                [bounds.min_x, a[1] + t * dy]
            }
            Edge::Right => {
                let t = (bounds.max_x - a[0]) / dx;
                [bounds.max_x, a[1] + t * dy]
            }
            Edge::Top => {
                let t = (bounds.min_y - a[1]) / dy;
                [a[0] + t * dx, bounds.min_y]
            }
            Edge::Bottom => {
                let t = (bounds.max_y - a[1]) / dy;
                [a[0] + t * dx, bounds.max_y]
            }
        }
    }
}
