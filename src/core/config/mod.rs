pub mod color;
pub mod config;
pub mod error;

pub use color::parse_color;
pub use config::{SegmentSpan, WheelConfig, WheelLayoutConfig, WheelSpinConfig, WindowConfig};
pub use error::ConfigError;
