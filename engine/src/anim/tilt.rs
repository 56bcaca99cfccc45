//! Tilt-on-hover.
//!
//! Pointer position is normalized to `[-0.5, 0.5]` per axis and mapped to a
//! rotation in `[-12, 12]` degrees, with the cross-axis inversion that makes
//! the card tilt toward the pointer. Rotation targets move through springs;
//! hover scales up slightly and press scales down.

use std::time::Duration;

use folio_types::{Bounds, Vec2};

use super::SpringVec2;

const MAX_TILT_DEG: f32 = 12.0;
const HOVER_SCALE: f32 = 1.02;
const PRESS_SCALE: f32 = 0.95;

#[derive(Debug, Clone)]
pub struct Tilt {
    // x component holds rotation about the X axis, y about the Y axis.
    rotation: SpringVec2,
    hovered: bool,
    pressed: bool,
}

impl Default for Tilt {
    fn default() -> Self {
        Self::new()
    }
}

impl Tilt {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rotation: SpringVec2::new(150.0, 15.0),
            hovered: false,
            pressed: false,
        }
    }

    pub fn pointer_moved(&mut self, bounds: Bounds, pointer: Vec2) {
        self.hovered = true;
        let pct = bounds.normalized(pointer);
        // Pointer below center tips the top edge away (negative X rotation);
        // pointer right of center tips the right edge away.
        let rotate_x = -pct.y * 2.0 * MAX_TILT_DEG;
        let rotate_y = pct.x * 2.0 * MAX_TILT_DEG;
        self.rotation.set_target(Vec2::new(rotate_x, rotate_y));
    }

    pub fn pointer_left(&mut self) {
        self.hovered = false;
        self.pressed = false;
        self.rotation.set_target(Vec2::ZERO);
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub fn advance(&mut self, delta: Duration, reduced_motion: bool) {
        if reduced_motion {
            self.rotation.snap();
        } else {
            self.rotation.advance(delta);
        }
    }

    /// Current rotation in degrees, `(about_x, about_y)`.
    #[must_use]
    pub fn rotation(&self) -> Vec2 {
        self.rotation.value()
    }

    /// Uniform scale applied on top of the tilt.
    #[must_use]
    pub fn scale(&self) -> f32 {
        if self.pressed {
            PRESS_SCALE
        } else if self.hovered {
            HOVER_SCALE
        } else {
            1.0
        }
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}
