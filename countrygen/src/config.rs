use karta_rs::entities::{ExclusionRule, MapTarget};
use serde::{Deserialize, Serialize};

/// Run configuration: the ordered list of map targets to process.
///
/// The default reproduces the built-in target table this tool has always
/// shipped with: continental United States, Canada and a merged Europe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub targets: Vec<MapTarget>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            targets: vec![
                MapTarget {
                    id: "usa".into(),
                    name: "United States".into(),
                    regions: vec!["United States of America".into()],
                    //filter tiny islands
                    min_area_deg2: 2.0,
                    //continental US only: Alaska west of -130, Hawaii south of 25
                    exclusion: Some(ExclusionRule {
                        west_of: Some(-130.0),
                        south_of: Some(25.0),
                    }),
                    exclave_regions: vec![],
                },
                MapTarget {
                    id: "canada".into(),
                    name: "Canada".into(),
                    regions: vec!["Canada".into()],
                    //filter small arctic islands
                    min_area_deg2: 5.0,
                    exclusion: None,
                    exclave_regions: vec![],
                },
                MapTarget {
                    id: "europe".into(),
                    name: "Europe".into(),
                    regions: [
                        "Portugal",
                        "Spain",
                        "France",
                        "Belgium",
                        "Netherlands",
                        "Luxembourg",
                        "Germany",
                        "Switzerland",
                        "Austria",
                        "Italy",
                        "Slovenia",
                        "Croatia",
                        "Bosnia and Herz.",
                        "Serbia",
                        "Montenegro",
                        "Kosovo",
                        "North Macedonia",
                        "Albania",
                        "Greece",
                        "Bulgaria",
                        "Romania",
                        "Hungary",
                        "Slovakia",
                        "Czechia",
                        "Poland",
                        "Denmark",
                        "Norway",
                        "Sweden",
                        "Finland",
                        "Estonia",
                        "Latvia",
                        "Lithuania",
                        "United Kingdom",
                        "Ireland",
                        "Iceland",
                    ]
                    .map(String::from)
                    .to_vec(),
                    min_area_deg2: 0.5,
                    exclusion: None,
                    exclave_regions: vec![],
                },
            ],
        }
    }
}
