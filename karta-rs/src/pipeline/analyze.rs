use anyhow::{Result, ensure};

use crate::geometry::primitives::Ring;

/// Index of the main polygon: the one with the maximum shoelace area.
/// Ties resolve to the first polygon in input order.
pub fn main_polygon_idx(rings: &[Ring]) -> Result<usize> {
    ensure!(!rings.is_empty(), "cannot analyze an empty polygon group");

    let mut best = 0;
    let mut best_area = rings[0].area();
    for (i, ring) in rings.iter().enumerate().skip(1) {
        let area = ring.area();
        if area > best_area {
            (best, best_area) = (i, area);
        }
    }
    Ok(best)
}
