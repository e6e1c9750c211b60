use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use wheel_of_fortune::core::components::SpinButton;
use wheel_of_fortune::{WheelConfig, WheelOfFortunePlugin};

/// Each `app.update()` advances the real clock by this much (the first
/// update only starts the clock).
pub const FRAME: Duration = Duration::from_millis(100);

/// Headless app with the whole widget and a manually stepped clock. Runs the
/// startup schedule before returning.
pub fn headless_app(cfg: WheelConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .insert_resource(Assets::<Mesh>::default())
        .insert_resource(Assets::<ColorMaterial>::default())
        .insert_resource(cfg)
        .add_plugins(WheelOfFortunePlugin);
    app.update();
    app
}

pub fn spin_button(app: &mut App) -> Entity {
    let mut q = app.world_mut().query_filtered::<Entity, With<SpinButton>>();
    q.single(app.world()).expect("exactly one spin button")
}

/// Simulates a click: the interaction flips to `Pressed` for one frame.
pub fn click(app: &mut App) {
    let button = spin_button(app);
    if let Some(mut interaction) = app.world_mut().get_mut::<Interaction>(button) {
        *interaction = Interaction::Pressed;
    }
    app.update();
    if let Some(mut interaction) = app.world_mut().get_mut::<Interaction>(button) {
        *interaction = Interaction::None;
    }
}
