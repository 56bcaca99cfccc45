//! Minimal geometry for the pointer-driven primitives.
//!
//! Cell coordinates arrive from the terminal as `u16`; the primitives work
//! in `f32` so springs can move through fractional positions.

/// A 2D vector in cell space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    #[must_use]
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// An axis-aligned region in cell space.
///
/// Mirrors `ratatui::layout::Rect` without depending on it; the tui layer
/// converts at the boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn contains(self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// Position of `point` relative to the top-left corner.
    #[must_use]
    pub fn relative(self, point: Vec2) -> Vec2 {
        Vec2::new(point.x - self.x, point.y - self.y)
    }

    /// Position of `point` normalized to `[-0.5, 0.5]` per axis.
    ///
    /// Degenerate (zero-sized) bounds normalize to the center.
    #[must_use]
    pub fn normalized(self, point: Vec2) -> Vec2 {
        let nx = if self.width > 0.0 {
            ((point.x - self.x) / self.width - 0.5).clamp(-0.5, 0.5)
        } else {
            0.0
        };
        let ny = if self.height > 0.0 {
            ((point.y - self.y) / self.height - 0.5).clamp(-0.5, 0.5)
        } else {
            0.0
        };
        Vec2::new(nx, ny)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_bounds() {
        let b = Bounds::new(10.0, 4.0, 20.0, 6.0);
        assert_eq!(b.center(), Vec2::new(20.0, 7.0));
    }

    #[test]
    fn contains_is_half_open() {
        let b = Bounds::new(0.0, 0.0, 10.0, 10.0);
        assert!(b.contains(Vec2::new(0.0, 0.0)));
        assert!(b.contains(Vec2::new(9.9, 9.9)));
        assert!(!b.contains(Vec2::new(10.0, 5.0)));
    }

    #[test]
    fn normalized_spans_half_range() {
        let b = Bounds::new(0.0, 0.0, 100.0, 50.0);
        assert_eq!(b.normalized(Vec2::new(0.0, 0.0)), Vec2::new(-0.5, -0.5));
        assert_eq!(b.normalized(Vec2::new(50.0, 25.0)), Vec2::new(0.0, 0.0));
        assert_eq!(b.normalized(Vec2::new(100.0, 50.0)), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn normalized_degenerate_bounds() {
        let b = Bounds::new(5.0, 5.0, 0.0, 0.0);
        assert_eq!(b.normalized(Vec2::new(9.0, 9.0)), Vec2::ZERO);
    }
}
