use log::warn;

use crate::entities::FeatureIndex;
use crate::geometry::primitives::Ring;

/// Concatenates the boundary rings of every region in `regions`, in the
/// given order. A name absent from the index is reported as a warning and
/// skipped; the remaining regions still contribute.
pub fn extract_rings(index: &FeatureIndex, regions: &[String]) -> Vec<Ring> {
    let mut rings = vec![];
    for name in regions {
        match index.rings(name) {
            Some(region_rings) => rings.extend_from_slice(region_rings),
            None => warn!("region '{name}' not found in feature collection"),
        }
    }
    rings
}
