//! Joint bounds computation, aspect-ratio correction and rescaling into
//! the padded unit frame.

use anyhow::{Result, ensure};
use itertools::Itertools;
use log::warn;

use crate::geometry::primitives::{Point, Rect, Ring};

/// Fixed output canvas proportions (800x600).
pub const TARGET_ASPECT_RATIO: f64 = 4.0 / 3.0;
/// Margin fraction reserved on each side of the unit frame.
pub const FRAME_PADDING: f64 = 0.05;
/// Output coordinates are rounded to this many decimals.
pub const COORD_DECIMALS: u32 = 4;

/// Axis-aligned bounding box over all rings jointly, so that islands and
/// mainland share one coordinate frame.
pub fn joint_bbox(rings: &[Ring]) -> Result<Rect> {
    ensure!(!rings.is_empty(), "bounding box of zero rings");
    let bbox = rings
        .iter()
        .map(Ring::bbox)
        .reduce(Rect::bounding_rect)
        .expect("rings is non-empty");
    Ok(bbox)
}

/// Rescales all rings into `[FRAME_PADDING, 1 - FRAME_PADDING]²`.
///
/// The joint bounding box is first padded on its shorter axis to match
/// [`TARGET_ASPECT_RATIO`], so every output group fits the same canvas
/// proportions without distorting relative shape. Coordinates are rounded
/// to [`COORD_DECIMALS`] decimals. Rings that collapse below 3 vertices
/// (or to zero area) through rounding are dropped with a warning.
pub fn normalize_frame(rings: &[Ring]) -> Result<Vec<Ring>> {
    let frame = joint_bbox(rings)?.pad_to_aspect(TARGET_ASPECT_RATIO);
    ensure!(
        frame.width() > 0.0 && frame.height() > 0.0,
        "cannot normalize a degenerate frame: {frame:?}"
    );

    let usable = 1.0 - 2.0 * FRAME_PADDING;
    let normalized = rings
        .iter()
        .filter_map(|ring| {
            let scaled = ring
                .vertices()
                .iter()
                .map(|&Point(x, y)| {
                    round_point(Point(
                        FRAME_PADDING + (x - frame.x_min) / frame.width() * usable,
                        FRAME_PADDING + (y - frame.y_min) / frame.height() * usable,
                    ))
                })
                .collect_vec();
            match Ring::new(scaled) {
                Ok(ring) => Some(ring),
                Err(e) => {
                    warn!("dropping polygon degenerated by normalization: {e}");
                    None
                }
            }
        })
        .collect();
    Ok(normalized)
}

/// Rounds a coordinate to the fixed output precision.
pub fn round_coord(v: f64) -> f64 {
    let scale = 10f64.powi(COORD_DECIMALS as i32);
    (v * scale).round() / scale
}

pub fn round_point(p: Point) -> Point {
    Point(round_coord(p.0), round_coord(p.1))
}
