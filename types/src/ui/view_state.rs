//! UI configuration options derived from config.

/// UI options (theme, motion, glyphs).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for icons and decorations.
    pub ascii_only: bool,
    /// High-contrast color palette.
    pub high_contrast: bool,
    /// Render end states without motion: springs snap to target, reveals
    /// complete immediately, the ambient background holds still.
    pub reduced_motion: bool,
}
