use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Point;

/// Immutable configuration record for one output map target: a single
/// country or a merged cluster of source regions, processed end-to-end
/// into one normalized polygon group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapTarget {
    /// Identifier used to key the results and name the output constants.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Source region names to merge into this target.
    pub regions: Vec<String>,
    /// Minimum polygon area in squared degrees, measured before projection.
    pub min_area_deg2: f64,
    /// Optional geographic exclusion of outlying landmasses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusion: Option<ExclusionRule>,
    /// Regions processed within the same normalization frame as the
    /// primary landmass, but listed separately (e.g. a distant exclave).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclave_regions: Vec<String>,
}

/// Excludes polygons whose centroid falls in a cut-off zone.
///
/// A coarse heuristic tied to one dataset's geometry (e.g. dropping Alaska
/// and Hawaii to keep the continental United States); it is configuration
/// data per target, not core algorithm logic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExclusionRule {
    /// Exclude polygons whose centroid lies west of this longitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub west_of: Option<f64>,
    /// Exclude polygons whose centroid lies south of this latitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub south_of: Option<f64>,
}

impl ExclusionRule {
    /// True if a polygon with this centroid should be excluded.
    pub fn excludes(&self, centroid: Point) -> bool {
        self.west_of.is_some_and(|lon| centroid.0 < lon)
            || self.south_of.is_some_and(|lat| centroid.1 < lat)
    }
}
