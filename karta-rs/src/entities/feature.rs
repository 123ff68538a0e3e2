use std::collections::HashMap;

use crate::geometry::primitives::Ring;

/// A single labeled record from the source dataset: a region name with the
/// boundary rings of its landmasses (one ring per landmass, islands
/// included).
#[derive(Clone, Debug)]
pub struct Feature {
    pub name: String,
    pub rings: Vec<Ring>,
}

/// Region name to boundary rings mapping, built once per run so that
/// lookups do not rescan the full feature list.
#[derive(Clone, Debug, Default)]
pub struct FeatureIndex {
    map: HashMap<String, Vec<Ring>>,
    n_features: usize,
}

impl FeatureIndex {
    pub fn from_features(features: Vec<Feature>) -> Self {
        let n_features = features.len();
        let mut map: HashMap<String, Vec<Ring>> = HashMap::new();
        for feature in features {
            //a name occurring twice contributes all its rings
            map.entry(feature.name).or_default().extend(feature.rings);
        }
        FeatureIndex { map, n_features }
    }

    /// Boundary rings of the region, or `None` for an unknown name.
    pub fn rings(&self, name: &str) -> Option<&[Ring]> {
        self.map.get(name).map(Vec::as_slice)
    }

    /// Number of features the index was built from.
    pub fn n_features(&self) -> usize {
        self.n_features
    }
}
