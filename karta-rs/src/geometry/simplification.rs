//! Tolerance-based ring simplification (Ramer-Douglas-Peucker).

use itertools::Itertools;
use log::{debug, info};

use crate::geometry::primitives::{Point, Ring};

/// Simplifies a [`Ring`] by dropping vertices that lie within `tolerance`
/// of the simplified boundary.
///
/// The ring is treated as a closed polyline anchored at its first vertex,
/// so the first vertex always survives and ring closure is preserved.
/// Policy: the result never has fewer than 3 vertices. If simplification
/// would collapse the ring below that (or to zero area), the original ring
/// is returned unchanged as the least-simplified valid result.
pub fn simplify_ring(ring: &Ring, tolerance: f64) -> Ring {
    if ring.n_vertices() <= 3 {
        //can't simplify further
        return ring.clone();
    }

    //close the polyline explicitly so both endpoints are anchored
    let mut closed = ring.vertices().to_vec();
    closed.push(closed[0]);

    let mut keep = vec![false; closed.len()];
    keep[0] = true;
    *keep.last_mut().expect("closed ring is never empty") = true;
    rdp_mark(&closed, 0, closed.len() - 1, tolerance, &mut keep);

    let simplified = closed
        .iter()
        .zip(keep.iter())
        .filter_map(|(p, &kept)| kept.then_some(*p))
        .collect_vec();

    match Ring::new(simplified) {
        Ok(simplified) => {
            info!(
                "[SIMPL] ring reduced from {} to {} vertices (tolerance {})",
                ring.n_vertices(),
                simplified.n_vertices(),
                tolerance
            );
            simplified
        }
        Err(e) => {
            debug!("[SIMPL] simplification collapsed the ring ({e}), keeping original");
            ring.clone()
        }
    }
}

/// Recursive Douglas-Peucker marking pass over `points[start..=end]`.
/// Marks the vertex furthest from the chord if it exceeds `tolerance` and
/// recurses into both halves.
fn rdp_mark(points: &[Point], start: usize, end: usize, tolerance: f64, keep: &mut Vec<bool>) {
    if end <= start + 1 {
        return;
    }

    let (mut furthest, mut max_distance) = (start, 0.0);
    for i in (start + 1)..end {
        let distance = chord_distance(&points[i], &points[start], &points[end]);
        if distance > max_distance {
            (furthest, max_distance) = (i, distance);
        }
    }

    if max_distance > tolerance {
        keep[furthest] = true;
        rdp_mark(points, start, furthest, tolerance, keep);
        rdp_mark(points, furthest, end, tolerance, keep);
    }
}

/// Perpendicular distance from `p` to the line through `a` and `b`.
/// Degenerates to the point distance when `a` and `b` coincide.
fn chord_distance(p: &Point, a: &Point, b: &Point) -> f64 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let sq_len = dx * dx + dy * dy;
    if sq_len == 0.0 {
        return p.distance(a);
    }
    (dy * p.0 - dx * p.1 + b.0 * a.1 - b.1 * a.0).abs() / sq_len.sqrt()
}
