//! Scroll position for a page body.

/// Manual scroll offset from the top of the rendered page, clamped to the
/// content height by the renderer each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    offset: u16,
}

impl ScrollState {
    #[must_use]
    pub const fn offset(self) -> u16 {
        self.offset
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16, max: u16) {
        self.offset = self.offset.saturating_add(lines).min(max);
    }

    /// Re-clamp after the content height changed (e.g. terminal resize).
    pub fn clamp_to(&mut self, max: u16) {
        self.offset = self.offset.min(max);
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_down_clamps_to_max() {
        let mut scroll = ScrollState::default();
        scroll.scroll_down(10, 4);
        assert_eq!(scroll.offset(), 4);
        scroll.scroll_down(1, 4);
        assert_eq!(scroll.offset(), 4);
    }

    #[test]
    fn scroll_up_saturates_at_zero() {
        let mut scroll = ScrollState::default();
        scroll.scroll_down(3, 10);
        scroll.scroll_up(5);
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn clamp_after_resize() {
        let mut scroll = ScrollState::default();
        scroll.scroll_down(8, 8);
        scroll.clamp_to(2);
        assert_eq!(scroll.offset(), 2);
    }
}
