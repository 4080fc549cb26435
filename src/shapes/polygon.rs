use crate::math::aabb::Aabb;
use crate::math::vec2::Vec2;

/// An ordered sequence of vertices defining a body's boundary in world
/// coordinates.
///
/// Vertices keep whatever winding order they were constructed with; the sign
/// of [`signed_area`](Polygon::signed_area) reflects it (counter-clockwise
/// positive). An empty polygon is permitted as a placeholder, but area and
/// centroid are only meaningful with at least 3 vertices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub vertices: Vec<Vec2>,
}

impl Polygon {
    /// Creates a polygon from a list of vertices, in order.
    pub fn new(vertices: Vec<Vec2>) -> Self {
        Polygon { vertices }
    }

    /// Calculates the signed area using the shoelace formula.
    /// Positive for counter-clockwise winding, negative for clockwise.
    /// Returns 0 for polygons with fewer than 3 vertices.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let v1 = self.vertices[i];
            let v2 = self.vertices[(i + 1) % n];
            sum += v1.cross(v2);
        }
        sum / 2.0
    }

    /// Calculates the unsigned area.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Calculates the centroid (center of mass for uniform density) from the
    /// per-edge cross products, normalized by `6 * signed_area`.
    ///
    /// Panics on a degenerate polygon (signed area of zero).
    pub fn centroid(&self) -> Vec2 {
        let signed_area = self.signed_area();
        assert!(signed_area != 0.0, "centroid of a degenerate polygon");

        let n = self.vertices.len();
        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..n {
            let v1 = self.vertices[i];
            let v2 = self.vertices[(i + 1) % n];
            let cross = v1.cross(v2);
            cx += (v1.x + v2.x) * cross;
            cy += (v1.y + v2.y) * cross;
        }
        Vec2::new(cx / (6.0 * signed_area), cy / (6.0 * signed_area))
    }

    /// Translates every vertex by `delta`, in place.
    pub fn translate(&mut self, delta: Vec2) {
        for v in &mut self.vertices {
            *v += delta;
        }
    }

    /// Rigidly rotates the polygon by `angle` radians about `pivot`,
    /// counter-clockwise for positive angles, in place.
    pub fn rotate(&mut self, angle: f64, pivot: Vec2) {
        // Move the pivot to the origin, rotate there, move back.
        self.translate(-pivot);
        for v in &mut self.vertices {
            *v = v.rotate(angle);
        }
        self.translate(pivot);
    }

    /// Returns the bounding box of the vertices, or `None` for an empty
    /// polygon.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(&self.vertices)
    }
}
