//! Cursor-relative spotlight.
//!
//! Tracks the pointer relative to a region's top-left corner and fades a
//! radial highlight in while hovered and out on exit. Purely cosmetic; once
//! faded out no state remains.

use std::time::Duration;

use folio_types::{Bounds, Vec2};

const FADE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct Spotlight {
    /// Highlight center relative to the region's top-left.
    position: Vec2,
    opacity: f32,
    hovered: bool,
}

impl Default for Spotlight {
    fn default() -> Self {
        Self::new()
    }
}

impl Spotlight {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            opacity: 0.0,
            hovered: false,
        }
    }

    pub fn pointer_moved(&mut self, bounds: Bounds, pointer: Vec2) {
        self.hovered = true;
        self.position = bounds.relative(pointer);
    }

    pub fn pointer_left(&mut self) {
        self.hovered = false;
    }

    pub fn advance(&mut self, delta: Duration, reduced_motion: bool) {
        let target = if self.hovered { 1.0 } else { 0.0 };
        if reduced_motion {
            self.opacity = target;
            return;
        }
        let step = delta.as_secs_f32() / FADE.as_secs_f32();
        if self.opacity < target {
            self.opacity = (self.opacity + step).min(target);
        } else {
            self.opacity = (self.opacity - step).max(target);
        }
    }

    /// Highlight center relative to the region's top-left corner.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(8);

    #[test]
    fn position_is_relative_to_top_left() {
        let bounds = Bounds::new(10.0, 5.0, 30.0, 10.0);
        let mut spotlight = Spotlight::new();
        spotlight.pointer_moved(bounds, Vec2::new(15.0, 8.0));
        assert_eq!(spotlight.position(), Vec2::new(5.0, 3.0));
    }

    #[test]
    fn fades_in_while_hovered() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let mut spotlight = Spotlight::new();
        spotlight.pointer_moved(bounds, Vec2::new(5.0, 5.0));
        spotlight.advance(FRAME, false);
        let early = spotlight.opacity();
        assert!(early > 0.0 && early < 1.0);
        for _ in 0..100 {
            spotlight.advance(FRAME, false);
        }
        assert!((spotlight.opacity() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn fades_out_after_exit() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let mut spotlight = Spotlight::new();
        spotlight.pointer_moved(bounds, Vec2::new(5.0, 5.0));
        for _ in 0..100 {
            spotlight.advance(FRAME, false);
        }
        spotlight.pointer_left();
        for _ in 0..100 {
            spotlight.advance(FRAME, false);
        }
        assert!(!spotlight.is_visible());
    }

    #[test]
    fn reduced_motion_toggles_instantly() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let mut spotlight = Spotlight::new();
        spotlight.pointer_moved(bounds, Vec2::new(1.0, 1.0));
        spotlight.advance(FRAME, true);
        assert!((spotlight.opacity() - 1.0).abs() < f32::EPSILON);
        spotlight.pointer_left();
        spotlight.advance(FRAME, true);
        assert!(!spotlight.is_visible());
    }
}
