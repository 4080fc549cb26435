pub mod factory;
pub mod polygon;

pub use polygon::Polygon;
