use serde::{Deserialize, Serialize};

/// External representation of the source dataset: a GeoJSON
/// FeatureCollection of labeled country boundaries.
/// Fields the pipeline does not consume are ignored.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtFeatureCollection {
    pub features: Vec<ExtFeature>,
}

/// A single labeled feature.
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtFeature {
    pub properties: ExtProperties,
    pub geometry: ExtGeometry,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct ExtProperties {
    /// Region name, the lookup key for extraction.
    #[serde(rename = "NAME")]
    pub name: String,
}

/// Feature geometry, limited to the variants present in the source
/// dataset. Each linear ring is a sequence of (longitude, latitude) pairs
/// in degrees; the first ring of a polygon is its exterior boundary,
/// subsequent rings are holes.
#[derive(Serialize, Deserialize, Clone)]
#[serde(tag = "type")]
pub enum ExtGeometry {
    Polygon {
        coordinates: Vec<Vec<(f64, f64)>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<(f64, f64)>>>,
    },
}
