//! Defines the surface descriptor cars drive over.

/// A friction/elasticity modifier for the surface a car rests on.
/// Immutable after construction; attached to a body as opaque info and
/// queried by downcast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceInfo {
    coefficient: f64,
}

impl SurfaceInfo {
    /// Creates a surface descriptor with the given surface coefficient.
    pub fn new(coefficient: f64) -> Self {
        SurfaceInfo { coefficient }
    }

    /// Returns the surface coefficient.
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_info_coefficient() {
        let surface = SurfaceInfo::new(0.85);
        assert_eq!(surface.coefficient(), 0.85);
    }
}
