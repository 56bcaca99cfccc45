//! Elapsed/duration timing shared by the finite effects.

use std::time::Duration;

/// Progress of `elapsed` through `duration`, clamped to `[0, 1]`.
///
/// A zero duration is immediately complete.
#[must_use]
pub fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// A finite one-shot timer.
#[derive(Debug, Clone)]
pub struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_is_complete() {
        assert!((normalized_progress(Duration::ZERO, Duration::ZERO) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn progress_is_clamped() {
        let timer = {
            let mut t = EffectTimer::new(Duration::from_millis(10));
            t.advance(Duration::from_millis(100));
            t
        };
        assert!(timer.is_finished());
        assert!((timer.progress() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn midpoint_progress() {
        let mut timer = EffectTimer::new(Duration::from_millis(100));
        timer.advance(Duration::from_millis(50));
        assert!((timer.progress() - 0.5).abs() < 0.01);
        assert!(!timer.is_finished());
    }

    #[test]
    fn ease_out_cubic_endpoints() {
        assert!(ease_out_cubic(0.0).abs() < f32::EPSILON);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < f32::EPSILON);
        assert!(ease_out_cubic(0.5) > 0.5);
    }
}
