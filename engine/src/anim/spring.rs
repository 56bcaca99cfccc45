//! Damped spring integrator.
//!
//! The pointer primitives move their visual state toward a target through a
//! spring (stiffness/damping) instead of jumping, so displacement is a
//! continuous function of time. Integration is semi-implicit Euler with the
//! frame delta clamped, which keeps the system stable across pauses and
//! dropped frames.

use std::time::Duration;

use folio_types::Vec2;

/// Longest single step fed to the integrator. Larger deltas (the app was
/// suspended, the terminal was resized for a while) are clamped rather than
/// integrated in one unstable jump.
const MAX_STEP: f32 = 0.05;

/// Value and velocity below which the spring counts as settled.
const REST_EPSILON: f32 = 0.01;

/// A one-dimensional spring approaching a movable target.
#[derive(Debug, Clone)]
pub struct Spring {
    stiffness: f32,
    damping: f32,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    #[must_use]
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            value: 0.0,
            velocity: 0.0,
            target: 0.0,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Snap to the target, discarding velocity. Used under reduced motion.
    pub fn snap(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }

    pub fn advance(&mut self, delta: Duration) {
        let mut remaining = delta.as_secs_f32().min(0.25);
        while remaining > 0.0 {
            let dt = remaining.min(MAX_STEP);
            let accel = self.stiffness * (self.target - self.value) - self.damping * self.velocity;
            self.velocity += accel * dt;
            self.value += self.velocity * dt;
            remaining -= dt;
        }
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON
    }
}

/// Two independent springs sharing parameters, one per axis.
#[derive(Debug, Clone)]
pub struct SpringVec2 {
    x: Spring,
    y: Spring,
}

impl SpringVec2 {
    #[must_use]
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            x: Spring::new(stiffness, damping),
            y: Spring::new(stiffness, damping),
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn snap(&mut self) {
        self.x.snap();
        self.y.snap();
    }

    pub fn advance(&mut self, delta: Duration) {
        self.x.advance(delta);
        self.y.advance(delta);
    }

    #[must_use]
    pub fn value(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(8);

    #[test]
    fn converges_to_target() {
        let mut spring = Spring::new(150.0, 15.0);
        spring.set_target(10.0);
        for _ in 0..1000 {
            spring.advance(FRAME);
        }
        assert!((spring.value() - 10.0).abs() < 0.05);
        assert!(spring.is_settled());
    }

    #[test]
    fn returns_to_rest_after_target_reset() {
        let mut spring = Spring::new(150.0, 15.0);
        spring.set_target(25.0);
        for _ in 0..100 {
            spring.advance(FRAME);
        }
        spring.set_target(0.0);
        for _ in 0..1000 {
            spring.advance(FRAME);
        }
        assert!(spring.value().abs() < 0.05);
    }

    #[test]
    fn motion_is_continuous() {
        // No single frame may jump the value by more than the distance an
        // undamped system could cover; in practice steps stay small.
        let mut spring = Spring::new(150.0, 15.0);
        spring.set_target(100.0);
        let mut prev = spring.value();
        for _ in 0..500 {
            spring.advance(FRAME);
            let step = (spring.value() - prev).abs();
            assert!(step < 10.0, "discontinuous step: {step}");
            prev = spring.value();
        }
    }

    #[test]
    fn snap_jumps_to_target() {
        let mut spring = Spring::new(150.0, 15.0);
        spring.set_target(7.0);
        spring.snap();
        assert!((spring.value() - 7.0).abs() < f32::EPSILON);
        assert!(spring.is_settled());
    }

    #[test]
    fn large_delta_stays_stable() {
        let mut spring = Spring::new(150.0, 15.0);
        spring.set_target(5.0);
        spring.advance(Duration::from_secs(3));
        assert!(spring.value().is_finite());
        assert!(spring.value().abs() < 50.0);
    }

    #[test]
    fn vec2_axes_are_independent() {
        let mut spring = SpringVec2::new(150.0, 15.0);
        spring.set_target(Vec2::new(10.0, 0.0));
        for _ in 0..1000 {
            spring.advance(FRAME);
        }
        let v = spring.value();
        assert!((v.x - 10.0).abs() < 0.05);
        assert!(v.y.abs() < 0.05);
    }
}
