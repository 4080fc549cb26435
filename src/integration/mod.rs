pub mod shape_update;

pub use shape_update::{rot_speed, shape_update, DEFAULT_ROT_SPEED};
