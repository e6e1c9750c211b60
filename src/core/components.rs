use bevy::prelude::*;

/// The rotating drawing surface: parent of the face and segment visuals.
/// Its `Transform` rotation is the only thing the spin animation touches.
#[derive(Component)]
pub struct WheelSurface;

/// The overlay surface carrying the pointer. Never rotated.
#[derive(Component)]
pub struct PointerSurface;

/// Tag for every visual drawn onto a surface; `render` clears these.
#[derive(Component)]
pub struct SurfaceVisual;

/// Filled circle behind the segments.
#[derive(Component)]
pub struct WheelFace;

/// One coloured pie wedge, by position in the configured sector list.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelSegment {
    pub index: usize,
}

#[derive(Component)]
pub struct PointerVisual;

/// Marker for the user-facing spin trigger.
#[derive(Component)]
pub struct SpinButton;

/// Enabled state of an activation control. Presses on a disabled control
/// are dropped.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationControl {
    pub enabled: bool,
}
impl Default for ActivationControl {
    fn default() -> Self {
        Self { enabled: true }
    }
}
