use anyhow::{Result, ensure};

use crate::geometry::primitives::Point;

/// Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Axis-aligned bounding box of a set of points.
    /// Zero-extent boxes are allowed; points collapsing to a line or a
    /// single location still produce a valid (degenerate) bounding box.
    pub fn bounding(points: &[Point]) -> Result<Self> {
        ensure!(!points.is_empty(), "bounding box of zero points");

        let (mut x_min, mut y_min) = (f64::MAX, f64::MAX);
        let (mut x_max, mut y_max) = (f64::MIN, f64::MIN);

        for point in points.iter() {
            x_min = x_min.min(point.0);
            y_min = y_min.min(point.1);
            x_max = x_max.max(point.0);
            y_max = y_max.max(point.1);
        }
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Returns the smallest rectangle that contains both `a` and `b`.
    pub fn bounding_rect(a: Rect, b: Rect) -> Rect {
        Rect {
            x_min: f64::min(a.x_min, b.x_min),
            y_min: f64::min(a.y_min, b.y_min),
            x_max: f64::max(a.x_max, b.x_max),
            y_max: f64::max(a.y_max, b.y_max),
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Width over height. A zero-height rectangle is treated as square
    /// (ratio 1.0) so callers never divide by zero.
    pub fn aspect_ratio(&self) -> f64 {
        match self.height() {
            h if h > 0.0 => self.width() / h,
            _ => 1.0,
        }
    }

    /// Returns a new rectangle with the same center but inflated so that
    /// its width/height ratio equals `target_ratio`. The shorter axis is
    /// padded symmetrically; the longer axis is left untouched, so the
    /// content keeps its relative shape.
    pub fn pad_to_aspect(&self, target_ratio: f64) -> Rect {
        let ratio = self.aspect_ratio();
        if ratio > target_ratio {
            //too wide, pad the height
            let new_height = self.width() / target_ratio;
            let dy = (new_height - self.height()) / 2.0;
            Rect {
                y_min: self.y_min - dy,
                y_max: self.y_max + dy,
                ..*self
            }
        } else {
            //too tall (or already matching), pad the width
            //degenerate boxes must never shrink, hence the max
            let new_width = (self.height() * target_ratio).max(self.width());
            let dx = (new_width - self.width()) / 2.0;
            Rect {
                x_min: self.x_min - dx,
                x_max: self.x_max + dx,
                ..*self
            }
        }
    }
}
