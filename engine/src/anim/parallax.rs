//! Scroll-parallax offset.
//!
//! A pure function of scroll position: no springs, fully restartable and
//! deterministic. Progress is measured from the element's start crossing
//! the viewport's end (0) to the element's end crossing the viewport's
//! start (1).

/// Progress of an element through the viewport.
///
/// `element_top` is the element's first row in content coordinates,
/// `scroll_offset` the first visible content row.
#[must_use]
pub fn scroll_progress(
    element_top: f32,
    element_height: f32,
    scroll_offset: f32,
    viewport_height: f32,
) -> f32 {
    let span = viewport_height + element_height;
    if span <= 0.0 {
        return 0.0;
    }
    // Distance the element has traveled since its top entered at the
    // viewport's bottom edge.
    let traveled = scroll_offset + viewport_height - element_top;
    (traveled / span).clamp(0.0, 1.0)
}

/// Map progress `[0, 1]` linearly to a translation in `[-offset, offset]`.
#[must_use]
pub fn parallax_offset(progress: f32, offset: f32) -> f32 {
    (progress.clamp(0.0, 1.0) * 2.0 - 1.0) * offset
}
