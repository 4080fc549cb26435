use crate::common::color::Color;
use crate::math::aabb::Aabb;
use crate::math::vec2::Vec2;
use crate::shapes::polygon::Polygon;
use std::any::Any;

/// A sprite reference consumed by the renderer: image path plus the
/// dimensions to draw it at.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub path: String,
    pub dimensions: Vec2,
}

/// A rigid body: a polygon in world space plus the state the per-tick
/// integration needs.
///
/// The body owns its polygon exclusively; physics code mutates the vertices
/// in place through [`polygon_mut`](Body::polygon_mut) rather than copying
/// them out every tick. `rotation` is an accumulator in radians and is never
/// normalized mod 2π.
///
/// `info` is opaque per-body data owned by the body; it is released when the
/// body is dropped.
pub struct Body {
    polygon: Polygon,
    mass: f64,
    velocity: Vec2,
    rotation: f64,
    color: Color,
    // Accumulated external pushes, consumed and cleared by `tick`
    force: Vec2,
    impulse: Vec2,
    info: Option<Box<dyn Any>>,
    sprite: Option<Sprite>,
}

impl Body {
    /// Creates a body owning `polygon`, with the given mass and color.
    ///
    /// Panics if `mass` is not strictly positive.
    pub fn new(polygon: Polygon, mass: f64, color: Color) -> Self {
        assert!(mass > 0.0, "Body mass must be strictly positive");
        Body {
            polygon,
            mass,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            color,
            force: Vec2::ZERO,
            impulse: Vec2::ZERO,
            info: None,
            sprite: None,
        }
    }

    /// Creates a body carrying opaque per-body info.
    pub fn with_info(polygon: Polygon, mass: f64, color: Color, info: Box<dyn Any>) -> Self {
        let mut body = Body::new(polygon, mass, color);
        body.info = Some(info);
        body
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Sets the absolute rotation, rigidly rotating the polygon about its
    /// current centroid by the difference from the previous rotation.
    ///
    /// Panics on a degenerate polygon (see [`Polygon::centroid`]).
    pub fn set_rotation(&mut self, rotation: f64) {
        let delta = rotation - self.rotation;
        let centroid = self.polygon.centroid();
        self.polygon.rotate(delta, centroid);
        self.rotation = rotation;
    }

    /// Returns the centroid of the body's polygon.
    pub fn centroid(&self) -> Vec2 {
        self.polygon.centroid()
    }

    /// Moves the body so its centroid lands on `centroid`, translating every
    /// vertex rigidly.
    pub fn set_centroid(&mut self, centroid: Vec2) {
        let delta = centroid - self.polygon.centroid();
        self.polygon.translate(delta);
    }

    /// Read access to the live polygon, no copy.
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Mutable access to the live polygon, no copy. Physics code edits the
    /// vertices directly through this.
    pub fn polygon_mut(&mut self) -> &mut Polygon {
        &mut self.polygon
    }

    /// Width and height of the axis-aligned bounding box of the vertices.
    /// Zero for an empty polygon.
    pub fn dimensions(&self) -> Vec2 {
        self.polygon
            .bounds()
            .map_or(Vec2::ZERO, |bounds| bounds.extents())
    }

    /// True if any vertex lies within the closed rectangle
    /// `[lower_bound, upper_bound]` component-wise. The body counts as on
    /// screen as soon as a single vertex is visible.
    pub fn is_on_screen(&self, lower_bound: Vec2, upper_bound: Vec2) -> bool {
        let screen = Aabb::new(lower_bound, upper_bound);
        self.polygon.vertices.iter().any(|v| screen.contains(*v))
    }

    /// Accumulates an external force for the next tick.
    pub fn add_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Accumulates an external impulse for the next tick.
    pub fn add_impulse(&mut self, impulse: Vec2) {
        self.impulse += impulse;
    }

    /// Advances the body by `dt`: folds the accumulated force and impulse
    /// into the velocity, clears both accumulators, then translates the
    /// polygon by `velocity * dt` (semi-implicit Euler).
    pub fn tick(&mut self, dt: f64) {
        let dv = (self.force * dt + self.impulse) * (1.0 / self.mass);
        self.velocity += dv;
        self.force = Vec2::ZERO;
        self.impulse = Vec2::ZERO;
        self.polygon.translate(self.velocity * dt);
    }

    /// The opaque per-body info, if any.
    pub fn info(&self) -> Option<&dyn Any> {
        self.info.as_deref()
    }

    pub fn info_mut(&mut self) -> Option<&mut dyn Any> {
        self.info.as_deref_mut()
    }

    pub fn sprite(&self) -> Option<&Sprite> {
        self.sprite.as_ref()
    }

    pub fn set_sprite(&mut self, sprite: Sprite) {
        self.sprite = Some(sprite);
    }
}
