//! Serialization of map results as GDScript constant declarations.
//!
//! Per target: one `const <ID>_POLY_<i>: Array[Vector2]` per polygon, a
//! `COUNTRIES` dictionary bundling name, polygons and centroid, and a
//! `MAP_IDS` array preserving target order.

use itertools::Itertools;
use karta_rs::entities::MapResult;
use karta_rs::geometry::primitives::{Point, Ring};

pub fn results_to_gdscript(results: &[(String, MapResult)]) -> String {
    let mut lines = vec![
        "class_name CountryData".to_string(),
        "extends RefCounted".to_string(),
        String::new(),
        "## Accurate country boundary data derived from Natural Earth 110m dataset.".to_string(),
        "## Generated by countrygen — do not edit manually.".to_string(),
        String::new(),
    ];

    for (id, result) in results {
        lines.push(format!("# --- {} ---", result.name));
        for (i, polygon) in result.polygons.iter().enumerate() {
            lines.push(format!(
                "const {}: Array[Vector2] = [",
                poly_const_name(id, i)
            ));
            lines.push(format_vector2_array(polygon, "\t\t"));
            lines.push("]".into());
            lines.push(String::new());
        }
    }

    lines.push(String::new());
    lines.push("const COUNTRIES: Dictionary = {".into());
    for (id, result) in results {
        lines.push(format!("\t\"{id}\": {{"));
        lines.push(format!("\t\t\"name\": \"{}\",", result.name));

        let poly_refs = (0..result.polygons.len())
            .map(|i| poly_const_name(id, i))
            .collect_vec();
        if let [single] = poly_refs.as_slice() {
            lines.push(format!("\t\t\"polygons\": [{single}],"));
        } else {
            lines.push("\t\t\"polygons\": [".into());
            for poly_ref in &poly_refs {
                lines.push(format!("\t\t\t{poly_ref},"));
            }
            lines.push("\t\t],".into());
        }

        let Point(c_x, c_y) = result.centroid;
        lines.push(format!("\t\t\"centroid\": Vector2({c_x}, {c_y}),"));
        lines.push("\t},".into());
    }
    lines.push("}".into());
    lines.push(String::new());

    let ids = results.iter().map(|(id, _)| format!("\"{id}\"")).join(", ");
    lines.push(format!("const MAP_IDS: Array[String] = [{ids}]"));
    lines.push(String::new());

    lines.join("\n")
}

fn poly_const_name(id: &str, idx: usize) -> String {
    format!("{}_POLY_{idx}", id.to_uppercase())
}

/// Formats a ring as Vector2 literals, four entries per line.
fn format_vector2_array(ring: &Ring, indent: &str) -> String {
    ring.vertices()
        .chunks(4)
        .map(|chunk| {
            let items = chunk
                .iter()
                .map(|Point(x, y)| format!("Vector2({x}, {y})"))
                .join(", ");
            format!("{indent}{items},")
        })
        .join("\n")
}
