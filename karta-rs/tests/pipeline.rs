#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use itertools::Itertools;
    use test_case::test_case;

    use karta_rs::entities::{ExclusionRule, Feature, FeatureIndex, MapTarget};
    use karta_rs::geometry::primitives::{Point, Ring};
    use karta_rs::pipeline::normalize::FRAME_PADDING;
    use karta_rs::pipeline::region_filter::filter_by_area;
    use karta_rs::pipeline::{process_all, process_target};

    fn ring(coords: &[(f64, f64)]) -> Ring {
        Ring::new(coords.iter().map(|&(x, y)| Point(x, y)).collect_vec())
            .expect("test ring is valid")
    }

    fn index(features: &[(&str, Vec<Ring>)]) -> FeatureIndex {
        FeatureIndex::from_features(
            features
                .iter()
                .map(|(name, rings)| Feature {
                    name: name.to_string(),
                    rings: rings.clone(),
                })
                .collect(),
        )
    }

    fn target(id: &str, regions: &[&str], min_area: f64) -> MapTarget {
        MapTarget {
            id: id.to_string(),
            name: id.to_string(),
            regions: regions.iter().map(|r| r.to_string()).collect(),
            min_area_deg2: min_area,
            exclusion: None,
            exclave_regions: vec![],
        }
    }

    fn square_10deg() -> Ring {
        ring(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)])
    }

    fn big_triangle() -> Ring {
        //area 8 deg²
        ring(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)])
    }

    fn small_triangle() -> Ring {
        //area 0.5 deg²
        ring(&[(10.0, 0.0), (11.0, 0.0), (10.0, 1.0)])
    }

    fn assert_within_frame(ring: &Ring) {
        for p in ring.vertices() {
            assert!(p.0 >= FRAME_PADDING - 1e-9 && p.0 <= 1.0 - FRAME_PADDING + 1e-9);
            assert!(p.1 >= FRAME_PADDING - 1e-9 && p.1 <= 1.0 - FRAME_PADDING + 1e-9);
        }
    }

    #[test]
    fn single_square_region() {
        let index = index(&[("Squareland", vec![square_10deg()])]);
        let result = process_target(&index, &target("square", &["Squareland"], 0.0)).unwrap();

        assert_eq!(result.polygons.len(), 1);
        let polygon = &result.polygons[0];
        assert_eq!(polygon.n_vertices(), 4);
        assert!(polygon.area() > 0.0);
        assert_within_frame(polygon);
        //the square lands centered in the frame
        assert!(approx_eq!(f64, result.centroid.0, 0.5, epsilon = 1e-3));
        assert!(approx_eq!(f64, result.centroid.1, 0.5, epsilon = 1e-3));
    }

    #[test]
    fn area_filter_drops_small_regions() {
        let index = index(&[
            ("Bigland", vec![big_triangle()]),
            ("Smallisle", vec![small_triangle()]),
        ]);
        let result =
            process_target(&index, &target("t", &["Bigland", "Smallisle"], 1.0)).unwrap();

        //only the above-threshold triangle survives
        assert_eq!(result.polygons.len(), 1);
        assert_eq!(result.polygons[0].n_vertices(), 3);
    }

    #[test]
    fn area_filter_falls_back_to_largest() {
        let index = index(&[
            ("Bigland", vec![big_triangle()]),
            ("Smallisle", vec![small_triangle()]),
        ]);
        //both triangles are below this threshold
        let result =
            process_target(&index, &target("t", &["Bigland", "Smallisle"], 100.0)).unwrap();
        assert_eq!(result.polygons.len(), 1);
    }

    #[test_case(0.1)]
    #[test_case(10.0)]
    #[test_case(1000.0)]
    fn filter_never_empties_a_non_empty_input(min_area: f64) {
        let filtered = filter_by_area(vec![big_triangle(), small_triangle()], min_area);
        assert!(!filtered.is_empty());
    }

    #[test]
    fn fallback_keeps_the_largest_rejected_polygon() {
        let filtered = filter_by_area(vec![small_triangle(), big_triangle()], 100.0);
        assert_eq!(filtered.len(), 1);
        assert!(approx_eq!(f64, filtered[0].area(), 8.0, epsilon = 1e-9));
    }

    #[test]
    fn missing_region_is_non_fatal() {
        let index = index(&[("Squareland", vec![square_10deg()])]);
        let result =
            process_target(&index, &target("square", &["Squareland", "Atlantis"], 0.0)).unwrap();
        assert_eq!(result.polygons.len(), 1);
    }

    #[test]
    fn empty_target_fails_without_affecting_others() {
        let index = index(&[("Squareland", vec![square_10deg()])]);

        assert!(process_target(&index, &target("lost", &["Atlantis"], 0.0)).is_err());

        let targets = vec![
            target("square", &["Squareland"], 0.0),
            target("lost", &["Atlantis"], 0.0),
        ];
        let results = process_all(&index, &targets);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0, "square");
    }

    #[test]
    fn results_preserve_configuration_order() {
        let index = index(&[
            ("Squareland", vec![square_10deg()]),
            ("Bigland", vec![big_triangle()]),
        ]);
        let targets = vec![
            target("b", &["Bigland"], 0.0),
            target("a", &["Squareland"], 0.0),
        ];
        let results = process_all(&index, &targets);
        assert_eq!(
            results.iter().map(|(id, _)| id.as_str()).collect_vec(),
            vec!["b", "a"]
        );
    }

    #[test_case(Some(-130.0), None, (-139.5, 0.5), true; "west of cutoff")]
    #[test_case(Some(-130.0), None, (5.0, 5.0), false; "east of cutoff")]
    #[test_case(None, Some(25.0), (0.0, 20.0), true; "south of cutoff")]
    #[test_case(None, Some(25.0), (0.0, 30.0), false; "north of cutoff")]
    fn exclusion_rule_cutoffs(
        west_of: Option<f64>,
        south_of: Option<f64>,
        centroid: (f64, f64),
        excluded: bool,
    ) {
        let rule = ExclusionRule { west_of, south_of };
        assert_eq!(rule.excludes(centroid.into()), excluded);
    }

    #[test]
    fn exclusion_drops_outlying_landmass() {
        let far_west = ring(&[(-140.0, 0.0), (-139.0, 0.0), (-139.0, 1.0), (-140.0, 1.0)]);
        let index = index(&[("Spreadland", vec![square_10deg(), far_west])]);

        let mut cfg = target("spread", &["Spreadland"], 0.0);
        cfg.exclusion = Some(ExclusionRule {
            west_of: Some(-130.0),
            south_of: None,
        });
        let result = process_target(&index, &cfg).unwrap();
        assert_eq!(result.polygons.len(), 1);
        assert_eq!(result.polygons[0].n_vertices(), 4);
    }

    #[test]
    fn exclaves_share_the_normalization_frame() {
        let mainland = square_10deg();
        let exclave = ring(&[(30.0, 0.0), (35.0, 0.0), (35.0, 5.0), (30.0, 5.0)]);
        let index = index(&[
            ("Mainland", vec![mainland]),
            ("Exclave", vec![exclave]),
        ]);

        let mut cfg = target("split", &["Mainland"], 0.0);
        cfg.exclave_regions = vec!["Exclave".to_string()];
        let result = process_target(&index, &cfg).unwrap();

        //primary landmass first, exclave appended after it
        assert_eq!(result.polygons.len(), 2);
        assert_within_frame(&result.polygons[0]);
        assert_within_frame(&result.polygons[1]);

        //the exclave lies east of the mainland in the shared frame
        let mainland_x_max = result.polygons[0]
            .vertices()
            .iter()
            .map(|p| p.0)
            .fold(f64::MIN, f64::max);
        let exclave_x_min = result.polygons[1]
            .vertices()
            .iter()
            .map(|p| p.0)
            .fold(f64::MAX, f64::min);
        assert!(mainland_x_max < exclave_x_min);

        //the mainland is the larger polygon, so it provides the centroid
        assert!(result.polygons[0].area() > result.polygons[1].area());
        assert!(result.centroid.0 < 0.5);
    }

    #[test]
    fn oversized_rings_are_simplified() {
        //600-vertex circle of radius 10 degrees
        let circle = Ring::new(
            (0..600)
                .map(|i| {
                    let theta = i as f64 / 600.0 * std::f64::consts::TAU;
                    Point(10.0 * theta.cos(), 10.0 * theta.sin())
                })
                .collect_vec(),
        )
        .unwrap();
        let index = index(&[("Roundland", vec![circle])]);

        let result = process_target(&index, &target("round", &["Roundland"], 0.0)).unwrap();
        assert_eq!(result.polygons.len(), 1);
        assert!(result.polygons[0].n_vertices() >= 3);
        assert!(result.polygons[0].n_vertices() <= 400);
        assert_within_frame(&result.polygons[0]);
    }

    #[test]
    fn normalized_coordinates_round_to_four_decimals() {
        let index = index(&[("Squareland", vec![square_10deg()])]);
        let result = process_target(&index, &target("square", &["Squareland"], 0.0)).unwrap();

        for p in result.polygons.iter().flat_map(|r| r.vertices()) {
            assert!(approx_eq!(
                f64,
                p.0,
                (p.0 * 1e4).round() / 1e4,
                epsilon = 1e-12
            ));
            assert!(approx_eq!(
                f64,
                p.1,
                (p.1 * 1e4).round() / 1e4,
                epsilon = 1e-12
            ));
        }
    }
}
