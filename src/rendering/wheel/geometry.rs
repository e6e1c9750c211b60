//! Segment layout maths. Angles follow screen convention: measured from +x,
//! growing clockwise as seen on screen. The Bevy world is y-up, so a screen
//! angle `a` points along world angle `-a`.
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

/// Angular extent of one segment in screen convention (radians).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentArc {
    pub start: f32,
    pub end: f32,
}
impl SegmentArc {
    pub fn mid(&self) -> f32 {
        (self.start + self.end) * 0.5
    }
    pub fn half_width(&self) -> f32 {
        (self.end - self.start) * 0.5
    }
}

/// Consecutive arcs of `span` radians starting at angle 0, one per segment.
/// With a fixed span the arcs wrap past a full turn (or leave a gap) when
/// the segment count does not match.
pub fn segment_arcs(count: usize, span: f32) -> Vec<SegmentArc> {
    (0..count)
        .map(|i| SegmentArc {
            start: i as f32 * span,
            end: (i + 1) as f32 * span,
        })
        .collect()
}

/// Rotation turning a `CircularSector` mesh (centred on +Y) onto `arc`.
pub fn sector_mesh_rotation(arc: SegmentArc) -> Quat {
    Quat::from_rotation_z(-arc.mid() - FRAC_PI_2)
}

/// Wheel surface transform for a visual rotation of `rotation` radians
/// (clockwise on screen).
pub fn surface_rotation(rotation: f32) -> Quat {
    Quat::from_rotation_z(-rotation)
}
