use crate::geometry::primitives::{Point, Ring};

/// Final processed output for one map target.
///
/// Polygons are normalized to [0,1]², rounded, in extraction order (minus
/// area-filtered entries). The centroid is the label point of the largest
/// polygon by area.
#[derive(Debug, Clone)]
pub struct MapResult {
    pub name: String,
    pub polygons: Vec<Ring>,
    pub centroid: Point,
}

impl MapResult {
    pub fn total_vertices(&self) -> usize {
        self.polygons.iter().map(Ring::n_vertices).sum()
    }
}
