use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A 2D vector (or point) with `f64` components.
///
/// Value type: every operation returns a new vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Creates a new Vec2.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the dot product of two vectors.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Calculates the 2D scalar cross product (z-component of the 3D cross
    /// product). Signed: positive when `other` is counter-clockwise of `self`.
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Calculates the squared magnitude of the vector.
    /// Avoids the square root when only comparisons are needed.
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Calculates the magnitude (length) of the vector.
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Calculates the distance between two points.
    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    /// Rotates the vector by `angle` radians, counter-clockwise for positive
    /// angles.
    pub fn rotate(self, angle: f64) -> Self {
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        Self::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// Panics on a zero-magnitude vector; callers must guarantee non-zero
    /// input.
    pub fn unit(self) -> Self {
        let mag = self.magnitude();
        assert!(mag != 0.0, "unit() requires a non-zero vector");
        self * (1.0 / mag)
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

// Scalar multiplication, Vec2 * f64
impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

// Scalar multiplication, f64 * Vec2
impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, vec: Vec2) -> Vec2 {
        vec * self
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

// -v == ZERO - v
impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Vec2::ZERO - self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_vec2_add_sub() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vec2::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_vec2_neg() {
        let v = Vec2::new(3.0, -4.0);
        assert_eq!(-v, Vec2::new(-3.0, 4.0));
        assert_eq!(-Vec2::ZERO, Vec2::ZERO);
    }

    #[test]
    fn test_vec2_scalar_mul() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v * 3.0, Vec2::new(3.0, 6.0));
        assert_eq!(3.0 * v, Vec2::new(3.0, 6.0));
    }

    #[test]
    fn test_vec2_dot() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert!((v1.dot(v2) - 11.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_cross_sign() {
        let v1 = Vec2::new(1.0, 0.0);
        let v2 = Vec2::new(0.0, 1.0);
        assert!((v1.cross(v2) - 1.0).abs() < EPSILON);
        assert!((v2.cross(v1) + 1.0).abs() < EPSILON);
        assert!((v1.cross(v1) - 0.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_magnitude() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.magnitude() - 5.0).abs() < EPSILON);
        assert!((v.magnitude_squared() - 25.0).abs() < EPSILON);
        assert!((Vec2::ZERO.magnitude() - 0.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_distance() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(4.0, 6.0);
        assert!((v1.distance(v2) - 5.0).abs() < EPSILON);
        assert!((v2.distance(v1) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_rotate() {
        let v = Vec2::new(1.0, 0.0);

        // Counter-clockwise quarter turn
        let v90 = v.rotate(PI / 2.0);
        assert!((v90.x - 0.0).abs() < EPSILON);
        assert!((v90.y - 1.0).abs() < EPSILON);

        let v180 = v.rotate(PI);
        assert!((v180.x - -1.0).abs() < EPSILON);
        assert!((v180.y - 0.0).abs() < EPSILON);

        let v_neg90 = v.rotate(-PI / 2.0);
        assert!((v_neg90.x - 0.0).abs() < EPSILON);
        assert!((v_neg90.y - -1.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_unit() {
        let v = Vec2::new(3.0, 4.0);
        let u = v.unit();
        assert!((u.magnitude() - 1.0).abs() < EPSILON);
        assert!((u.x - 0.6).abs() < EPSILON);
        assert!((u.y - 0.8).abs() < EPSILON);
    }

    #[test]
    #[should_panic]
    fn test_vec2_unit_zero_vector() {
        Vec2::ZERO.unit();
    }

    proptest! {
        #[test]
        fn unit_has_magnitude_one(x in -1e6..1e6f64, y in -1e6..1e6f64) {
            prop_assume!(x.abs() > 1e-9 || y.abs() > 1e-9);
            let u = Vec2::new(x, y).unit();
            prop_assert!((u.magnitude() - 1.0).abs() < 1e-9);
        }

        #[test]
        fn rotate_preserves_magnitude(
            x in -1e3..1e3f64,
            y in -1e3..1e3f64,
            angle in -10.0..10.0f64,
        ) {
            let v = Vec2::new(x, y);
            prop_assert!((v.rotate(angle).magnitude() - v.magnitude()).abs() < 1e-6);
        }
    }
}
