#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use super::stats::{DebugState, DebugStats};

/// Logs spin progress at `log_interval` while the wheel turns.
#[cfg(feature = "debug")]
pub fn debug_logging_system(time: Res<Time>, mut state: ResMut<DebugState>, stats: Res<DebugStats>) {
    if !stats.spinning {
        state.time_accum = 0.0;
        return;
    }
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!("SPIN frame={} t={:.3}s fps={:.1} ft_ms={:.1} segments={} rotation={:.3}rad spins={}",
            state.frame_counter,
            time.elapsed_secs(),
            stats.fps,
            stats.frame_time_ms,
            stats.segment_count,
            stats.rotation,
            state.spins_started);
    }
}
