use anyhow::{Result, bail};

use crate::geometry::primitives::Point;
use crate::geometry::primitives::Rect;

/// An ordered sequence of vertices describing a polygon boundary.
///
/// The boundary is implicitly closed: a duplicate closing vertex is
/// stripped at construction and never stored. A ring always has at least
/// 3 vertices and a non-zero area. Winding order is preserved as given;
/// use [`Ring::area`] for the unsigned area.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    vertices: Vec<Point>,
}

impl Ring {
    pub fn new(mut vertices: Vec<Point>) -> Result<Self> {
        //strip the closing vertex if it duplicates the first one
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        if vertices.len() < 3 {
            bail!("ring must have at least 3 vertices: {vertices:?}");
        }
        if Ring::signed_area(&vertices) == 0.0 {
            bail!("ring has no area: {vertices:?}");
        }
        Ok(Ring { vertices })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i]
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Maps every vertex through `f`, preserving order and count.
    /// The caller is responsible for `f` not collapsing the ring.
    pub fn map_vertices(&self, f: impl Fn(Point) -> Point) -> Ring {
        Ring {
            vertices: self.vertices.iter().copied().map(f).collect(),
        }
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //counterclockwise = positive area, clockwise = negative area
    pub fn signed_area(points: &[Point]) -> f64 {
        let mut sigma = 0.0;
        for i in 0..points.len() {
            //next point
            let j = (i + 1) % points.len();

            let (x_i, y_i) = points[i].into();
            let (x_j, y_j) = points[j].into();

            sigma += x_i * y_j - x_j * y_i;
        }

        0.5 * sigma
    }

    /// Unsigned shoelace area, independent of winding order.
    pub fn area(&self) -> f64 {
        Ring::signed_area(&self.vertices).abs()
    }

    /// Area-weighted centroid of the interior.
    /// Based on: <https://en.wikipedia.org/wiki/Centroid#Of_a_polygon>
    pub fn centroid(&self) -> Point {
        let signed_area = Ring::signed_area(&self.vertices);
        let mut c_x = 0.0;
        let mut c_y = 0.0;

        for i in 0..self.n_vertices() {
            let j = (i + 1) % self.n_vertices();
            let Point(x_i, y_i) = self.vertex(i);
            let Point(x_j, y_j) = self.vertex(j);
            let cross = x_i * y_j - x_j * y_i;
            c_x += (x_i + x_j) * cross;
            c_y += (y_i + y_j) * cross;
        }

        c_x /= 6.0 * signed_area;
        c_y /= 6.0 * signed_area;

        (c_x, c_y).into()
    }

    pub fn bbox(&self) -> Rect {
        Rect::bounding(&self.vertices).expect("ring is never empty")
    }
}
