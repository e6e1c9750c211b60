use bevy::prelude::*;

use crate::core::components::{ActivationControl, SpinButton, WheelSurface};
use crate::core::config::WheelConfig;
use crate::core::spin::WheelSpin;
use crate::core::system::system_order::{WheelAnimateSet, WheelInputSet};
use crate::interaction::spin_button::{spin_button_pressed, SpinRequested};
use crate::rendering::wheel::{surface_rotation, WheelRedraw};

/// Activation and the per-frame spin step.
pub struct SpinAnimationPlugin;

impl Plugin for SpinAnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WheelSpin>()
            .add_event::<SpinRequested>()
            .add_event::<WheelRedraw>()
            .add_systems(
                Update,
                (
                    activate_spin
                        .in_set(WheelInputSet)
                        .after(spin_button_pressed),
                    advance_spin.in_set(WheelAnimateSet),
                ),
            );
    }
}

/// Starts a spin for each request unless one is already in flight. A
/// started spin disables the activation control.
pub fn activate_spin(
    mut requests: EventReader<SpinRequested>,
    time: Res<Time<Real>>,
    cfg: Res<WheelConfig>,
    mut spin: ResMut<WheelSpin>,
    mut q_controls: Query<&mut ActivationControl, With<SpinButton>>,
) {
    for _ in requests.read() {
        let target = cfg.wheel.target_rotation();
        if !spin.activate(time.elapsed(), target) {
            debug!(target: "wheel", "spin requested while spinning; ignored");
            continue;
        }
        for mut control in &mut q_controls {
            control.enabled = false;
        }
        info!(
            target: "wheel",
            target_rad = target,
            sector = cfg.wheel.target_sector_index,
            cycles = cfg.wheel.spin_cycles,
            duration_ms = cfg.wheel.total_spin_time_ms,
            "spin started"
        );
    }
}

/// Advances the in-flight spin: rotates the wheel surface, requests a
/// redraw, and on completion re-enables the activation control.
pub fn advance_spin(
    time: Res<Time<Real>>,
    cfg: Res<WheelConfig>,
    mut spin: ResMut<WheelSpin>,
    mut q_surface: Query<&mut Transform, With<WheelSurface>>,
    mut q_controls: Query<&mut ActivationControl, With<SpinButton>>,
    mut redraw: EventWriter<WheelRedraw>,
) {
    let Some(frame) = spin.advance(time.elapsed(), cfg.wheel.duration()) else {
        return;
    };
    for mut transform in &mut q_surface {
        transform.rotation = surface_rotation(frame.rotation);
    }
    redraw.write(WheelRedraw);
    if frame.finished {
        for mut control in &mut q_controls {
            control.enabled = true;
        }
        info!(target: "wheel", rotation_rad = frame.rotation, "spin finished");
    }
}
