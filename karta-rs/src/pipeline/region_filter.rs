use itertools::Itertools;
use log::info;
use ordered_float::NotNan;

use crate::entities::ExclusionRule;
use crate::geometry::primitives::Ring;

/// Drops every ring with an area below `min_area` (squared source
/// coordinate units, pre-projection).
///
/// Fallback-to-largest law: if the filter would eliminate every candidate,
/// the single largest ring is retained instead, so a non-empty input never
/// produces an empty result.
pub fn filter_by_area(rings: Vec<Ring>, min_area: f64) -> Vec<Ring> {
    if rings.is_empty() {
        return rings;
    }

    let kept = rings
        .iter()
        .filter(|r| r.area() >= min_area)
        .cloned()
        .collect_vec();

    match kept.is_empty() {
        false => kept,
        true => {
            let largest = rings
                .into_iter()
                .max_by_key(|r| NotNan::new(r.area()).expect("ring area is NaN"))
                .expect("rings is non-empty");
            vec![largest]
        }
    }
}

/// Applies a centroid-based exclusion rule, dropping outlying landmasses.
/// Evaluated on source coordinates, after the area filter and before
/// projection.
pub fn apply_exclusion(rings: Vec<Ring>, rule: &ExclusionRule) -> Vec<Ring> {
    let n_before = rings.len();
    let kept = rings
        .into_iter()
        .filter(|r| !rule.excludes(r.centroid()))
        .collect_vec();

    if kept.len() < n_before {
        info!(
            "excluded {} outlying polygons by centroid rule",
            n_before - kept.len()
        );
    }
    kept
}
