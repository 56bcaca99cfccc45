//! Character-by-character text reveal.
//!
//! A string is split into grapheme units; each unit animates from an
//! offset/faded state to rest, staggered by a fixed interval, after an
//! optional per-sequence delay. Whitespace is kept as a non-breaking space
//! so the line does not collapse while hidden.

use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;

/// Stagger between consecutive units.
const STAGGER: Duration = Duration::from_millis(30);

/// How long a single unit takes from hidden to resting.
const UNIT_DURATION: Duration = Duration::from_millis(180);

/// One animatable unit of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealUnit {
    display: String,
}

impl RevealUnit {
    /// The text rendered for this unit once (partially) visible.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }
}

/// A staggered reveal over one string.
#[derive(Debug, Clone)]
pub struct TextReveal {
    units: Vec<RevealUnit>,
    delay: Duration,
    elapsed: Duration,
}

impl TextReveal {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self::with_delay(text, Duration::ZERO)
    }

    /// `delay` shifts the whole sequence's start; stagger is per unit on
    /// top of it.
    #[must_use]
    pub fn with_delay(text: &str, delay: Duration) -> Self {
        let units = text
            .graphemes(true)
            .map(|g| RevealUnit {
                display: if g.trim().is_empty() {
                    String::from('\u{a0}')
                } else {
                    g.to_string()
                },
            })
            .collect();
        Self {
            units,
            delay,
            elapsed: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    /// Restart the sequence, e.g. when the owning view re-enters.
    pub fn replay(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Complete immediately (reduced motion).
    pub fn finish(&mut self) {
        self.elapsed = self.total_duration();
    }

    #[must_use]
    pub fn units(&self) -> &[RevealUnit] {
        &self.units
    }

    /// When unit `index` begins animating, relative to the sequence start.
    #[must_use]
    pub fn stagger_start(&self, index: usize) -> Duration {
        self.delay + STAGGER * index as u32
    }

    /// Progress of unit `index` in `[0, 1]`.
    #[must_use]
    pub fn unit_progress(&self, index: usize) -> f32 {
        let start = self.stagger_start(index);
        let local = self.elapsed.saturating_sub(start);
        super::normalized_progress(local, UNIT_DURATION)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.total_duration()
    }

    fn total_duration(&self) -> Duration {
        if self.units.is_empty() {
            return self.delay;
        }
        self.stagger_start(self.units.len() - 1) + UNIT_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_chars_two_units_in_order() {
        let reveal = TextReveal::new("AI");
        let units: Vec<&str> = reveal.units().iter().map(RevealUnit::display).collect();
        assert_eq!(units, ["A", "I"]);
        assert!(
            reveal.stagger_start(1) > reveal.stagger_start(0),
            "second unit must start strictly after the first"
        );
    }

    #[test]
    fn whitespace_becomes_nbsp() {
        let reveal = TextReveal::new("a b");
        assert_eq!(reveal.units()[1].display(), "\u{a0}");
    }

    #[test]
    fn delay_shifts_every_unit() {
        let plain = TextReveal::new("AI");
        let delayed = TextReveal::with_delay("AI", Duration::from_millis(500));
        for i in 0..2 {
            assert_eq!(
                delayed.stagger_start(i),
                plain.stagger_start(i) + Duration::from_millis(500)
            );
        }
    }

    #[test]
    fn units_complete_front_to_back() {
        let mut reveal = TextReveal::new("abc");
        reveal.advance(Duration::from_millis(200));
        assert!(reveal.unit_progress(0) >= reveal.unit_progress(1));
        assert!(reveal.unit_progress(1) >= reveal.unit_progress(2));
    }

    #[test]
    fn finishes_and_replays() {
        let mut reveal = TextReveal::new("hello");
        reveal.advance(Duration::from_secs(5));
        assert!(reveal.is_finished());
        assert!((reveal.unit_progress(4) - 1.0).abs() < f32::EPSILON);

        reveal.replay();
        assert!(!reveal.is_finished());
        assert!(reveal.unit_progress(0) < f32::EPSILON);
    }

    #[test]
    fn empty_text_is_finished_after_delay() {
        let mut reveal = TextReveal::with_delay("", Duration::from_millis(100));
        assert!(!reveal.is_finished());
        reveal.advance(Duration::from_millis(100));
        assert!(reveal.is_finished());
    }
}
