pub mod app;
pub mod core;
pub mod debug;
pub mod interaction;
pub mod rendering;

// Curated re-exports
pub use app::game::{ConfigLoadReport, WheelOfFortunePlugin};
pub use crate::core::config::{WheelConfig, WindowConfig};
pub use crate::core::spin::{SpinPhase, WheelSpin};
