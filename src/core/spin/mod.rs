pub mod easing;
pub mod spin;

pub use easing::{ease_out_quad, spin_progress};
pub use spin::{SpinFrame, SpinPhase, WheelSpin};
