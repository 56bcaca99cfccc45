//! Page-enter and overlay transition effects.

use std::time::Duration;

use super::EffectTimer;

/// Fade/slide-in applied to a freshly navigated page body.
///
/// The page starts faded and offset downward and eases to rest over half a
/// second.
#[derive(Debug, Clone)]
pub struct PageEffect {
    timer: EffectTimer,
}

impl PageEffect {
    pub const DURATION: Duration = Duration::from_millis(500);

    /// Rows the page body starts offset by.
    pub const ENTER_OFFSET: f32 = 2.0;

    #[must_use]
    pub fn enter() -> Self {
        Self {
            timer: EffectTimer::new(Self::DURATION),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}

/// The kind of overlay animation effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEffectKind {
    PopScale,
}

/// Open animation for the project detail overlay.
#[derive(Debug, Clone)]
pub struct OverlayEffect {
    kind: OverlayEffectKind,
    timer: EffectTimer,
}

impl OverlayEffect {
    #[must_use]
    pub fn pop_scale(duration: Duration) -> Self {
        Self {
            kind: OverlayEffectKind::PopScale,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    #[must_use]
    pub fn kind(&self) -> OverlayEffectKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_effect_runs_half_a_second() {
        let mut effect = PageEffect::enter();
        assert!(!effect.is_finished());
        effect.advance(Duration::from_millis(250));
        assert!((effect.progress() - 0.5).abs() < 0.01);
        effect.advance(Duration::from_millis(300));
        assert!(effect.is_finished());
    }

    #[test]
    fn overlay_pop_scale_initial_state() {
        let effect = OverlayEffect::pop_scale(Duration::from_millis(200));
        assert_eq!(effect.kind(), OverlayEffectKind::PopScale);
        assert!(!effect.is_finished());
        assert!(effect.progress() < 0.1);
    }

    #[test]
    fn overlay_progress_clamped() {
        let mut effect = OverlayEffect::pop_scale(Duration::from_millis(10));
        effect.advance(Duration::from_millis(50));
        assert!(effect.progress() <= 1.0);
        assert!(effect.is_finished());
    }
}
