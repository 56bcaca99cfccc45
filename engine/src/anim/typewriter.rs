//! Typewriter reveal and cursor blink for the hero terminal block.
//!
//! Both are advanced from the frame tick and owned by the home view's
//! state; navigating away drops them, which is the guaranteed stop path.

use std::time::Duration;

/// Interval between revealed characters.
const TYPE_INTERVAL: Duration = Duration::from_millis(30);

/// Cursor blink half-period.
const BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Fixed-interval reveal of a static text sample.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    /// Byte offset of the reveal boundary; always on a char boundary.
    revealed: usize,
    carry: Duration,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            revealed: 0,
            carry: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        if self.is_done() {
            return;
        }
        self.carry = self.carry.saturating_add(delta);
        while self.carry >= TYPE_INTERVAL && !self.is_done() {
            self.carry -= TYPE_INTERVAL;
            let next = self.text[self.revealed..]
                .chars()
                .next()
                .map_or(0, char::len_utf8);
            self.revealed += next;
        }
    }

    /// Reveal everything immediately (reduced motion).
    pub fn finish(&mut self) {
        self.revealed = self.text.len();
    }

    #[must_use]
    pub fn visible(&self) -> &str {
        &self.text[..self.revealed]
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.revealed >= self.text.len()
    }
}

/// Fixed-interval cursor blink.
#[derive(Debug, Clone)]
pub struct CursorBlink {
    visible: bool,
    carry: Duration,
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorBlink {
    #[must_use]
    pub fn new() -> Self {
        Self {
            visible: true,
            carry: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.carry = self.carry.saturating_add(delta);
        while self.carry >= BLINK_INTERVAL {
            self.carry -= BLINK_INTERVAL;
            self.visible = !self.visible;
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_at_fixed_interval() {
        let mut tw = Typewriter::new("abcd");
        tw.advance(Duration::from_millis(29));
        assert_eq!(tw.visible(), "");
        tw.advance(Duration::from_millis(1));
        assert_eq!(tw.visible(), "a");
        tw.advance(Duration::from_millis(60));
        assert_eq!(tw.visible(), "abc");
    }

    #[test]
    fn completes_and_stays_done() {
        let mut tw = Typewriter::new("hi");
        tw.advance(Duration::from_secs(1));
        assert!(tw.is_done());
        assert_eq!(tw.visible(), "hi");
        tw.advance(Duration::from_secs(1));
        assert_eq!(tw.visible(), "hi");
    }

    #[test]
    fn multibyte_boundaries_are_respected() {
        let mut tw = Typewriter::new("héllo");
        tw.advance(Duration::from_millis(60));
        assert_eq!(tw.visible(), "hé");
    }

    #[test]
    fn finish_reveals_everything() {
        let mut tw = Typewriter::new("sample");
        tw.finish();
        assert!(tw.is_done());
        assert_eq!(tw.visible(), "sample");
    }

    #[test]
    fn cursor_blinks_every_half_period() {
        let mut blink = CursorBlink::new();
        assert!(blink.is_visible());
        blink.advance(Duration::from_millis(500));
        assert!(!blink.is_visible());
        blink.advance(Duration::from_millis(500));
        assert!(blink.is_visible());
        // Large delta toggles the right number of times.
        blink.advance(Duration::from_millis(1500));
        assert!(!blink.is_visible());
    }
}
