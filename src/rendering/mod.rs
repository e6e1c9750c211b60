pub mod camera;
pub mod wheel;
