use anyhow::Result;
use float_cmp::approx_eq;
use itertools::Itertools;
use log::warn;

use crate::entities::{Feature, FeatureIndex};
use crate::geometry::primitives::{Point, Ring};
use crate::io::ext_repr::{ExtFeature, ExtFeatureCollection, ExtGeometry};

/// Converts the external feature collection into the internal name->rings
/// index. Only exterior boundaries are imported; holes are ignored.
/// Degenerate rings are reported and skipped, never fatal for the run.
pub fn import_feature_collection(ext: &ExtFeatureCollection) -> FeatureIndex {
    let features = ext.features.iter().map(import_feature).collect_vec();
    FeatureIndex::from_features(features)
}

fn import_feature(ext: &ExtFeature) -> Feature {
    let name = ext.properties.name.clone();
    let exteriors: Vec<&Vec<(f64, f64)>> = match &ext.geometry {
        ExtGeometry::Polygon { coordinates } => {
            exterior_of_polygon(coordinates, &name).into_iter().collect()
        }
        ExtGeometry::MultiPolygon { coordinates } => coordinates
            .iter()
            .filter_map(|polygon| exterior_of_polygon(polygon, &name))
            .collect(),
    };

    let rings = exteriors
        .into_iter()
        .filter_map(|coords| match import_ring(coords) {
            Ok(ring) => Some(ring),
            Err(e) => {
                warn!("[IMPORT] skipping degenerate ring of '{name}': {e}");
                None
            }
        })
        .collect_vec();

    Feature { name, rings }
}

fn exterior_of_polygon<'a>(
    polygon: &'a [Vec<(f64, f64)>],
    name: &str,
) -> Option<&'a Vec<(f64, f64)>> {
    if polygon.len() > 1 {
        warn!(
            "[IMPORT] ignoring {} hole(s) of a '{name}' polygon",
            polygon.len() - 1
        );
    }
    polygon.first()
}

/// Imports one linear ring: strips consecutive (approximately) duplicate
/// vertices and the closing duplicate, then validates the ring invariants.
pub fn import_ring(coords: &[(f64, f64)]) -> Result<Ring> {
    let mut points = coords.iter().map(|&(x, y)| Point(x, y)).collect_vec();
    eliminate_degenerate_points(&mut points);
    Ring::new(points)
}

/// Removes consecutive vertices that are approximately equal (wrapping
/// around the ring), which would otherwise produce zero-length edges.
pub fn eliminate_degenerate_points(points: &mut Vec<Point>) {
    let n_points = points.len();
    let mut indices_to_remove = vec![];
    for i in 0..n_points {
        let j = (i + 1) % n_points;
        let (p_i, p_j) = (points[i], points[j]);
        if approx_eq!(f64, p_i.0, p_j.0) && approx_eq!(f64, p_i.1, p_j.1) {
            //points are equal, mark for removal
            indices_to_remove.push(i);
        }
    }
    //remove in reverse order to avoid shifting indices
    for index in indices_to_remove.into_iter().rev() {
        if index < points.len() {
            points.remove(index);
        }
    }
}
