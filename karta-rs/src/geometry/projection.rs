//! Latitude-corrected equirectangular projection.
//!
//! Longitude is scaled by the cosine of a single reference latitude, which
//! keeps local horizontal and vertical scale comparable. The approximation
//! is not conformal at large extents, which is acceptable here: every map
//! target covers a single country or a cluster of nearby countries.

use crate::geometry::primitives::{Point, Ring};

/// Projects a (longitude, latitude) pair in degrees to planar (x, y).
/// The y axis is flipped so that north maps to decreasing y.
pub fn project(lon: f64, lat: f64, ref_lat: f64) -> Point {
    Point(lon * ref_lat.to_radians().cos(), -lat)
}

/// Projects all rings against a single reference latitude so that they
/// share one planar coordinate frame.
pub fn project_rings(rings: &[Ring], ref_lat: f64) -> Vec<Ring> {
    rings
        .iter()
        .map(|ring| ring.map_vertices(|Point(lon, lat)| project(lon, lat, ref_lat)))
        .collect()
}

/// Mean latitude over every vertex of `rings`, used as the reference
/// latitude of the projection. Returns 0.0 for an empty slice.
pub fn mean_latitude(rings: &[Ring]) -> f64 {
    let (sum, count) = rings
        .iter()
        .flat_map(|r| r.vertices())
        .fold((0.0, 0usize), |(sum, count), p| (sum + p.1, count + 1));

    match count {
        0 => 0.0,
        _ => sum / count as f64,
    }
}
