use crate::math::vec2::Vec2;

/// An axis-aligned bounding box defined by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Creates a new Aabb, normalizing the corners so that `min` holds the
    /// smaller coordinate on each axis.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Aabb {
            min: Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vec2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates the smallest Aabb containing every point in the slice.
    /// Returns `None` for an empty slice.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let first = *points.first()?;
        let mut min_pt = first;
        let mut max_pt = first;
        for point in points.iter().skip(1) {
            min_pt.x = min_pt.x.min(point.x);
            min_pt.y = min_pt.y.min(point.y);
            max_pt.x = max_pt.x.max(point.x);
            max_pt.y = max_pt.y.max(point.y);
        }
        Some(Aabb {
            min: min_pt,
            max: max_pt,
        })
    }

    /// Checks whether a point lies inside the box. The box is closed: points
    /// on the boundary count as contained.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Returns the width and height of the box.
    pub fn extents(&self) -> Vec2 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_new_normalizes_corners() {
        let b = Aabb::new(Vec2::new(4.0, -1.0), Vec2::new(-2.0, 3.0));
        assert_eq!(b.min, Vec2::new(-2.0, -1.0));
        assert_eq!(b.max, Vec2::new(4.0, 3.0));
    }

    #[test]
    fn test_aabb_from_points() {
        let points = [
            Vec2::new(1.0, 5.0),
            Vec2::new(-3.0, 2.0),
            Vec2::new(4.0, -1.0),
        ];
        let b = Aabb::from_points(&points).unwrap();
        assert_eq!(b.min, Vec2::new(-3.0, -1.0));
        assert_eq!(b.max, Vec2::new(4.0, 5.0));
    }

    #[test]
    fn test_aabb_from_points_empty() {
        assert_eq!(Aabb::from_points(&[]), None);
    }

    #[test]
    fn test_aabb_contains_closed_boundary() {
        let b = Aabb::new(Vec2::ZERO, Vec2::new(1000.0, 500.0));
        assert!(b.contains(Vec2::new(500.0, 250.0)));
        assert!(b.contains(Vec2::new(1000.0, 500.0))); // corner counts
        assert!(b.contains(Vec2::new(0.0, 250.0))); // edge counts
        assert!(!b.contains(Vec2::new(1000.1, 250.0)));
        assert!(!b.contains(Vec2::new(500.0, -0.1)));
    }

    #[test]
    fn test_aabb_extents() {
        let b = Aabb::new(Vec2::new(-2.0, 1.0), Vec2::new(3.0, 4.0));
        assert_eq!(b.extents(), Vec2::new(5.0, 3.0));
    }
}
