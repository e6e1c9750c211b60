use bevy::prelude::*;
use std::time::Duration;

use super::easing::{ease_out_quad, spin_progress};

/// Spin lifecycle. `Idle -> Spinning` on activation, `Spinning -> Idle` once
/// the configured duration has elapsed. There is no other transition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SpinPhase {
    #[default]
    Idle,
    Spinning {
        /// Real-clock timestamp of the activation.
        started_at: Duration,
        /// Rotation (radians) the wheel settles on.
        target: f32,
    },
}

/// Result of advancing an in-flight spin by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinFrame {
    pub rotation: f32,
    pub progress: f32,
    pub finished: bool,
}

/// Animation state of the wheel. Owned by the spin systems; the render path
/// never reads it.
#[derive(Resource, Debug, Default, Clone)]
pub struct WheelSpin {
    phase: SpinPhase,
    rotation: f32,
}

impl WheelSpin {
    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning { .. })
    }

    /// Current visual rotation in radians.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Starts a spin towards `target`. Returns `false` (and changes nothing)
    /// when a spin is already in flight.
    pub fn activate(&mut self, now: Duration, target: f32) -> bool {
        if self.is_spinning() {
            return false;
        }
        self.phase = SpinPhase::Spinning {
            started_at: now,
            target,
        };
        true
    }

    /// Recomputes the rotation for the frame at `now`. Once `total` has
    /// elapsed the rotation snaps exactly to the target and the spin ends.
    /// Returns `None` while idle.
    pub fn advance(&mut self, now: Duration, total: Duration) -> Option<SpinFrame> {
        let SpinPhase::Spinning { started_at, target } = self.phase else {
            return None;
        };
        let elapsed = now.saturating_sub(started_at);
        let progress = spin_progress(elapsed, total);
        if elapsed >= total {
            self.rotation = target;
            self.phase = SpinPhase::Idle;
            return Some(SpinFrame {
                rotation: target,
                progress,
                finished: true,
            });
        }
        self.rotation = ease_out_quad(progress) * target;
        Some(SpinFrame {
            rotation: self.rotation,
            progress,
            finished: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{PI, TAU};

    const TOTAL: Duration = Duration::from_millis(4000);

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn idle_advance_is_none() {
        let mut spin = WheelSpin::default();
        assert_eq!(spin.advance(ms(10), TOTAL), None);
        assert_eq!(spin.rotation(), 0.0);
    }

    #[test]
    fn second_activation_is_ignored() {
        let mut spin = WheelSpin::default();
        assert!(spin.activate(ms(100), 5.0));
        assert!(!spin.activate(ms(200), 9.0));
        assert_eq!(
            spin.phase(),
            SpinPhase::Spinning {
                started_at: ms(100),
                target: 5.0
            }
        );
    }

    #[test]
    fn first_frame_starts_at_zero_rotation() {
        let mut spin = WheelSpin::default();
        spin.activate(ms(50), 10.0);
        let frame = spin.advance(ms(50), TOTAL).expect("spinning");
        assert_eq!(frame.rotation, 0.0);
        assert!(!frame.finished);
    }

    #[test]
    fn midway_uses_ease_out() {
        let mut spin = WheelSpin::default();
        spin.activate(ms(0), 8.0);
        let frame = spin.advance(ms(2000), TOTAL).expect("spinning");
        assert_eq!(frame.progress, 0.5);
        assert_eq!(frame.rotation, 6.0);
        assert!(spin.is_spinning());
    }

    #[test]
    fn completion_snaps_to_target_and_goes_idle() {
        let target = 2.0 * (PI / 3.0) + 3.0 * TAU;
        let mut spin = WheelSpin::default();
        spin.activate(ms(1000), target);
        let mut now = ms(1000);
        let mut last = None;
        while spin.is_spinning() {
            now += ms(16);
            last = spin.advance(now, TOTAL);
        }
        let last = last.expect("at least one frame");
        assert!(last.finished);
        assert_eq!(last.rotation, target);
        assert_eq!(spin.rotation(), target);
        assert_eq!(spin.phase(), SpinPhase::Idle);
        assert!(now - ms(1000) >= TOTAL);
    }

    #[test]
    fn zero_duration_finishes_on_first_frame() {
        let mut spin = WheelSpin::default();
        spin.activate(ms(5), 3.0);
        let frame = spin.advance(ms(5), Duration::ZERO).expect("spinning");
        assert!(frame.finished);
        assert_eq!(spin.rotation(), 3.0);
    }

    #[test]
    fn can_spin_again_after_finishing() {
        let mut spin = WheelSpin::default();
        spin.activate(ms(0), 1.0);
        spin.advance(ms(4000), TOTAL);
        assert!(spin.activate(ms(5000), 2.0));
        let frame = spin.advance(ms(5000), TOTAL).expect("spinning");
        assert_eq!(frame.rotation, 0.0);
    }
}
