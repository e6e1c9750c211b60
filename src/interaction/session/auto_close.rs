//! Timed exit for unattended runs (`window.autoClose` seconds). The exit is
//! held back while a spin is in flight so a run never ends mid-animation.
use bevy::prelude::*;

use crate::core::config::WheelConfig;
use crate::core::spin::WheelSpin;

#[derive(Resource, Deref, DerefMut)]
struct AutoCloseTimer(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_autoclose)
            .add_systems(Update, exit_when_settled);
    }
}

fn arm_autoclose(mut commands: Commands, cfg: Res<WheelConfig>) {
    let Some(delay) = cfg.window.auto_close_duration() else {
        return;
    };
    info!(target: "session", seconds = delay.as_secs_f32(), "auto-close armed");
    commands.insert_resource(AutoCloseTimer(Timer::new(delay, TimerMode::Once)));
}

fn exit_when_settled(
    time: Res<Time>,
    spin: Option<Res<WheelSpin>>,
    timer: Option<ResMut<AutoCloseTimer>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let Some(mut timer) = timer else {
        return;
    };
    if !timer.tick(time.delta()).finished() {
        return;
    }
    if spin.is_some_and(|s| s.is_spinning()) {
        return;
    }
    info!(target: "session", "auto-close elapsed and wheel idle; exiting");
    ev_exit.write(AppExit::Success);
}
