// src/animation/sweep.rs
//
// One-shot entrance animation: walks progress 0 -> 1 once when the driver
// attaches, before scroll-derived progress takes over.

#[derive(Debug, Clone)]
pub struct EntranceSweep {
    elapsed: f32,
    duration: f32,
    complete: bool,
}

impl EntranceSweep {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration: duration_secs.max(f32::EPSILON),
            complete: false,
        }
    }

    /// Returns the eased progress for this tick, ending exactly at 1.0.
    /// Returns None once the sweep has finished.
    pub fn advance(&mut self, dt: f32) -> Option<f32> {
        if self.complete {
            return None;
        }

        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.complete = true;
            return Some(1.0);
        }
        Some(ease_in_out(self.elapsed / self.duration))
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_ends_exactly_at_one() {
        let mut sweep = EntranceSweep::new(1.0);

        let mut last = 0.0;
        for _ in 0..61 {
            if let Some(progress) = sweep.advance(1.0 / 60.0) {
                last = progress;
            }
        }

        assert_eq!(last, 1.0);
        assert!(sweep.is_complete());
        assert_eq!(sweep.advance(1.0 / 60.0), None);
    }

    #[test]
    fn test_sweep_is_eased_not_linear() {
        let mut sweep = EntranceSweep::new(2.0);

        // quarter of the way in, eased progress lags linear time
        let progress = sweep.advance(0.5).unwrap();
        assert!(progress < 0.25);
        assert!(progress > 0.0);
    }

    #[test]
    fn test_ease_in_out_midpoint_and_ends() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert_eq!(ease_in_out(1.0), 1.0);
    }
}
