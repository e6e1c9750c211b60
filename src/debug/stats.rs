#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use crate::core::components::WheelSegment;
#[cfg(feature = "debug")]
use crate::core::spin::WheelSpin;

#[cfg(feature = "debug")]
#[derive(Resource)]
pub struct DebugState {
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
    pub spins_started: u64,
    pub was_spinning: bool,
}

#[cfg(feature = "debug")]
impl Default for DebugState {
    fn default() -> Self {
        Self {
            log_interval: 0.5,
            time_accum: 0.0,
            frame_counter: 0,
            spins_started: 0,
            was_spinning: false,
        }
    }
}

#[cfg(feature = "debug")]
#[derive(Resource, Default, Debug, Clone)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub segment_count: usize,
    pub spinning: bool,
    pub rotation: f32,
}

#[cfg(feature = "debug")]
pub fn debug_stats_collect_system(
    time: Res<Time>,
    spin: Res<WheelSpin>,
    mut state: ResMut<DebugState>,
    mut stats: ResMut<DebugStats>,
    q_segments: Query<&WheelSegment>,
) {
    state.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    if stats.fps == 0.0 {
        stats.fps = inst_fps;
    } else {
        stats.fps = stats.fps * 0.9 + inst_fps * 0.1;
    }
    let inst_ms = dt * 1000.0;
    if stats.frame_time_ms == 0.0 {
        stats.frame_time_ms = inst_ms;
    } else {
        stats.frame_time_ms = stats.frame_time_ms * 0.9 + inst_ms * 0.1;
    }
    stats.segment_count = q_segments.iter().count();
    stats.spinning = spin.is_spinning();
    stats.rotation = spin.rotation();
    if stats.spinning && !state.was_spinning {
        state.spins_started += 1;
    }
    state.was_spinning = stats.spinning;
}
