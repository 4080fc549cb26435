pub mod common;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;

// Re-export key types for easier use
pub use common::{Color, SurfaceInfo};
pub use integration::{rot_speed, shape_update};
pub use math::aabb::Aabb;
pub use math::vec2::Vec2;
pub use objects::body::{Body, Sprite};
pub use shapes::Polygon;
