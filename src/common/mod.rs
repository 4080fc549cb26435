pub mod color;
pub mod surface;

pub use color::Color;
pub use surface::SurfaceInfo;
