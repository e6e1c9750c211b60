//! Debug module: feature gated frame stats & periodic spin logging.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
pub mod stats;

#[cfg(feature = "debug")]
pub use stats::{DebugState, DebugStats};

#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use crate::core::system::system_order::WheelAnimateSet;

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use logging::debug_logging_system;
        use stats::debug_stats_collect_system;

        app.init_resource::<DebugState>()
            .init_resource::<DebugStats>()
            .add_systems(
                Update,
                (debug_stats_collect_system, debug_logging_system)
                    .chain()
                    .after(WheelAnimateSet),
            );
    }
}
