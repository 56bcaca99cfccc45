//! Pointer-attraction ("magnetic") displacement.
//!
//! While the pointer moves inside a region, the region is displaced toward
//! the pointer by a damped fraction of its offset from center. On exit the
//! target returns to zero and the same spring settles the region back to
//! rest, so there is never a discontinuous jump.

use std::time::Duration;

use folio_types::{Bounds, Vec2};

use super::SpringVec2;

const ATTRACTION: f32 = 0.3;
const STIFFNESS: f32 = 150.0;
const DAMPING: f32 = 15.0;

#[derive(Debug, Clone)]
pub struct Magnetic {
    spring: SpringVec2,
    hovered: bool,
}

impl Default for Magnetic {
    fn default() -> Self {
        Self::new()
    }
}

impl Magnetic {
    #[must_use]
    pub fn new() -> Self {
        Self {
            spring: SpringVec2::new(STIFFNESS, DAMPING),
            hovered: false,
        }
    }

    /// Pointer moved within `bounds`.
    pub fn pointer_moved(&mut self, bounds: Bounds, pointer: Vec2) {
        self.hovered = true;
        let offset = pointer - bounds.center();
        self.spring.set_target(offset.scale(ATTRACTION));
    }

    /// Pointer left the region; displacement returns to rest.
    pub fn pointer_left(&mut self) {
        self.hovered = false;
        self.spring.set_target(Vec2::ZERO);
    }

    pub fn advance(&mut self, delta: Duration, reduced_motion: bool) {
        if reduced_motion {
            self.spring.snap();
        } else {
            self.spring.advance(delta);
        }
    }

    /// Current displacement of the region from its laid-out position.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.spring.value()
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        !self.hovered && self.spring.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(8);

    fn region() -> Bounds {
        Bounds::new(0.0, 0.0, 40.0, 10.0)
    }

    #[test]
    fn displaces_toward_pointer() {
        let mut magnetic = Magnetic::new();
        // Pointer right of and below center (20, 5).
        magnetic.pointer_moved(region(), Vec2::new(30.0, 8.0));
        for _ in 0..500 {
            magnetic.advance(FRAME, false);
        }
        let offset = magnetic.offset();
        assert!((offset.x - 3.0).abs() < 0.1, "x -> 10 * 0.3");
        assert!((offset.y - 0.9).abs() < 0.1, "y -> 3 * 0.3");
    }

    #[test]
    fn converges_to_zero_after_exit() {
        let mut magnetic = Magnetic::new();
        magnetic.pointer_moved(region(), Vec2::new(39.0, 9.0));
        for _ in 0..40 {
            magnetic.advance(FRAME, false);
        }
        magnetic.pointer_left();
        let mut frames = 0usize;
        while !magnetic.is_at_rest() {
            magnetic.advance(FRAME, false);
            frames += 1;
            assert!(frames < 2000, "did not settle in a bounded frame count");
        }
        assert!(magnetic.offset().length() < 0.05);
    }

    #[test]
    fn center_pointer_means_no_displacement() {
        let mut magnetic = Magnetic::new();
        magnetic.pointer_moved(region(), region().center());
        for _ in 0..200 {
            magnetic.advance(FRAME, false);
        }
        assert!(magnetic.offset().length() < 0.05);
    }

    #[test]
    fn reduced_motion_snaps() {
        let mut magnetic = Magnetic::new();
        magnetic.pointer_moved(region(), Vec2::new(30.0, 5.0));
        magnetic.advance(FRAME, true);
        assert!((magnetic.offset().x - 3.0).abs() < f32::EPSILON);
    }
}
