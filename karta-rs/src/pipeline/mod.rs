//! The processing pipeline: extraction, filtering, projection,
//! normalization and analysis of map targets.

pub mod analyze;
pub mod extract;
pub mod normalize;
pub mod region_filter;

use anyhow::{Result, ensure};
use itertools::Itertools;
use log::{error, info};

use crate::entities::{FeatureIndex, MapResult, MapTarget};
use crate::geometry::projection::{mean_latitude, project_rings};
use crate::geometry::simplification::simplify_ring;
use crate::pipeline::analyze::main_polygon_idx;
use crate::pipeline::extract::extract_rings;
use crate::pipeline::normalize::{normalize_frame, round_point};
use crate::pipeline::region_filter::{apply_exclusion, filter_by_area};

/// Rings above this vertex count are simplified after normalization.
pub const MAX_RING_VERTICES: usize = 400;
/// Simplification tolerance in normalized coordinate space
/// (~2 pixels at 800px width).
pub const SIMPLIFY_TOLERANCE: f64 = 0.003;

/// Runs the full pipeline for a single map target.
///
/// Failure (no polygons resolved, or everything filtered away) is fatal
/// for this target only; the caller decides how to proceed.
pub fn process_target(index: &FeatureIndex, target: &MapTarget) -> Result<MapResult> {
    let raw = extract_rings(index, &target.regions);
    ensure!(
        !raw.is_empty(),
        "no polygons resolved for target '{}'",
        target.id
    );

    let n_raw = raw.len();
    let mut rings = filter_by_area(raw, target.min_area_deg2);
    if let Some(rule) = &target.exclusion {
        rings = apply_exclusion(rings, rule);
    }
    info!(
        "[{}] {} raw polygons -> {} after filtering (min area {} deg²)",
        target.id,
        n_raw,
        rings.len(),
        target.min_area_deg2
    );

    //exclaves pass the same area filter but skip the exclusion rule,
    //and share the normalization frame with the primary landmass
    if !target.exclave_regions.is_empty() {
        let exclaves = extract_rings(index, &target.exclave_regions);
        rings.extend(filter_by_area(exclaves, target.min_area_deg2));
    }
    ensure!(
        !rings.is_empty(),
        "every polygon of target '{}' was filtered out",
        target.id
    );

    let ref_lat = mean_latitude(&rings);
    let projected = project_rings(&rings, ref_lat);
    let normalized = normalize_frame(&projected)?;

    let polygons = normalized
        .into_iter()
        .map(|ring| match ring.n_vertices() > MAX_RING_VERTICES {
            true => simplify_ring(&ring, SIMPLIFY_TOLERANCE),
            false => ring,
        })
        .collect_vec();
    ensure!(
        !polygons.is_empty(),
        "no valid polygons left for target '{}' after normalization",
        target.id
    );

    let main_idx = main_polygon_idx(&polygons)?;
    let centroid = round_point(polygons[main_idx].centroid());

    let result = MapResult {
        name: target.name.clone(),
        polygons,
        centroid,
    };
    info!(
        "[{}] {} final polygons, {} total vertices, centroid ({}, {})",
        target.id,
        result.polygons.len(),
        result.total_vertices(),
        result.centroid.0,
        result.centroid.1
    );
    Ok(result)
}

/// Processes every target independently, in configuration order.
/// A failing target is logged and omitted; the others still complete.
pub fn process_all(index: &FeatureIndex, targets: &[MapTarget]) -> Vec<(String, MapResult)> {
    targets
        .iter()
        .filter_map(|target| match process_target(index, target) {
            Ok(result) => Some((target.id.clone(), result)),
            Err(e) => {
                error!("target '{}' failed: {e:#}", target.id);
                None
            }
        })
        .collect()
}
