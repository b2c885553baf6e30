// src/animation/smoothing.rs
//
// Exponential approach toward the raw scroll progress, so coarse wheel
// deltas do not snap the icon around.

#[derive(Debug, Clone)]
pub struct ProgressSmoother {
    current: f32,
    target: f32,
    duration_secs: f32,
}

impl ProgressSmoother {
    pub fn new(duration_ms: f32) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            duration_secs: (duration_ms / 1000.0).max(0.001),
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump without easing; used when something else (the entrance sweep)
    /// has been driving progress directly.
    pub fn snap_to(&mut self, value: f32) {
        self.current = value;
        self.target = value;
    }

    /// Closes ~95% of the gap to the target within the configured duration.
    pub fn advance(&mut self, dt: f32) -> f32 {
        let decay_rate = 3.0 / self.duration_secs;
        let blend = 1.0 - (-dt * decay_rate).exp();
        self.current += (self.target - self.current) * blend;
        self.current
    }

    pub fn current(&self) -> f32 {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_moves_toward_target() {
        let mut smoother = ProgressSmoother::new(1000.0);
        smoother.set_target(1.0);

        let first = smoother.advance(0.016);
        let second = smoother.advance(0.016);

        assert!(first > 0.0 && first < 1.0);
        assert!(second > first);
    }

    #[test]
    fn test_gap_mostly_closed_within_duration() {
        let mut smoother = ProgressSmoother::new(1000.0);
        smoother.set_target(1.0);

        // one second of 60fps ticks
        for _ in 0..60 {
            smoother.advance(1.0 / 60.0);
        }

        assert!(smoother.current() > 0.9);
    }

    #[test]
    fn test_snap_to_skips_easing() {
        let mut smoother = ProgressSmoother::new(1000.0);
        smoother.snap_to(0.75);

        assert_eq!(smoother.current(), 0.75);
        assert_eq!(smoother.advance(0.016), 0.75);
    }
}
