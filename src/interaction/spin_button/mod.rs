//! The activation control: a `bevy_ui` button that requests a spin while
//! enabled and greys out while a spin is in flight.
use bevy::prelude::*;

use crate::core::components::{ActivationControl, SpinButton};
use crate::core::system::system_order::{WheelAnimateSet, WheelInputSet};

const ENABLED_BG: Color = Color::srgb(0.12, 0.32, 0.75);
const HOVERED_BG: Color = Color::srgb(0.18, 0.42, 0.90);
const PRESSED_BG: Color = Color::srgb(0.08, 0.22, 0.55);
const DISABLED_BG: Color = Color::srgb(0.62, 0.62, 0.62);
const ENABLED_TEXT: Color = Color::WHITE;
const DISABLED_TEXT: Color = Color::srgb(0.85, 0.85, 0.85);

/// A user press on an enabled activation control.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct SpinRequested;

#[derive(Component)]
struct SpinButtonRoot;

#[derive(Component)]
pub struct SpinButtonLabel;

pub struct SpinButtonPlugin;

impl Plugin for SpinButtonPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SpinRequested>()
            .add_systems(Startup, spawn_spin_button)
            .add_systems(Update, spin_button_pressed.in_set(WheelInputSet))
            .add_systems(Update, style_spin_button.after(WheelAnimateSet));
    }
}

pub fn spawn_spin_button(mut commands: Commands) {
    commands
        .spawn((
            SpinButtonRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::FlexEnd,
                padding: UiRect::bottom(Val::Px(24.0)),
                ..default()
            },
            Name::new("SpinButtonRoot"),
        ))
        .with_children(|root| {
            root.spawn((
                SpinButton,
                Button,
                ActivationControl::default(),
                Node {
                    width: Val::Px(140.0),
                    height: Val::Px(48.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..default()
                },
                BorderRadius::all(Val::Px(8.0)),
                BackgroundColor(ENABLED_BG),
                Name::new("SpinButton"),
            ))
            .with_children(|button| {
                button.spawn((
                    SpinButtonLabel,
                    Text::new("Spin"),
                    TextFont {
                        font_size: 22.0,
                        ..default()
                    },
                    TextColor(ENABLED_TEXT),
                ));
            });
        });
}

/// Turns presses on an enabled button into [`SpinRequested`]. A disabled
/// control swallows the press, like a disabled HTML button.
pub fn spin_button_pressed(
    q_btn: Query<(&Interaction, &ActivationControl), (Changed<Interaction>, With<SpinButton>)>,
    mut requests: EventWriter<SpinRequested>,
) {
    for (interaction, control) in &q_btn {
        if *interaction != Interaction::Pressed {
            continue;
        }
        if control.enabled {
            requests.write(SpinRequested);
        } else {
            debug!(target: "wheel", "spin button pressed while disabled; ignored");
        }
    }
}

fn style_spin_button(
    mut q_btn: Query<
        (&Interaction, &ActivationControl, &mut BackgroundColor),
        (
            Or<(Changed<Interaction>, Changed<ActivationControl>)>,
            With<SpinButton>,
        ),
    >,
    mut q_label: Query<&mut TextColor, With<SpinButtonLabel>>,
) {
    for (interaction, control, mut bg) in &mut q_btn {
        let color = match (control.enabled, *interaction) {
            (false, _) => DISABLED_BG,
            (true, Interaction::Pressed) => PRESSED_BG,
            (true, Interaction::Hovered) => HOVERED_BG,
            (true, Interaction::None) => ENABLED_BG,
        };
        bg.set_if_neq(BackgroundColor(color));
        let text = if control.enabled {
            ENABLED_TEXT
        } else {
            DISABLED_TEXT
        };
        // Single button: every label belongs to it.
        for mut label in &mut q_label {
            label.set_if_neq(TextColor(text));
        }
    }
}
