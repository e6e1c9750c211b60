pub mod geometry;
pub mod wheel;

pub use geometry::{segment_arcs, sector_mesh_rotation, surface_rotation, SegmentArc};
pub use wheel::{WheelAssets, WheelRedraw, WheelRenderPlugin};
