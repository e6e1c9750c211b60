use std::time::Duration;

/// Ease-out quadratic: fast start, decelerating to rest at `t = 1`.
#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    t * (2.0 - t)
}

/// Linear progress of a spin, clamped to `[0, 1]`. A zero duration counts as
/// already complete.
pub fn spin_progress(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_endpoints() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        assert_eq!(ease_out_quad(0.5), 0.75);
    }

    #[test]
    fn ease_is_monotonic_on_unit_interval() {
        let mut prev = ease_out_quad(0.0);
        for i in 1..=1000 {
            let v = ease_out_quad(i as f32 / 1000.0);
            assert!(v >= prev, "ease decreased at step {i}: {prev} -> {v}");
            prev = v;
        }
    }

    #[test]
    fn progress_clamps() {
        let total = Duration::from_millis(4000);
        assert_eq!(spin_progress(Duration::ZERO, total), 0.0);
        assert_eq!(spin_progress(Duration::from_millis(1000), total), 0.25);
        assert_eq!(spin_progress(Duration::from_millis(9000), total), 1.0);
        assert_eq!(spin_progress(Duration::from_millis(5), Duration::ZERO), 1.0);
    }
}
