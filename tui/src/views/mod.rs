//! Per-page view rendering.
//!
//! Each page module exposes one `draw` function that renders into the body
//! area, records its interactive regions in the frame's hit map, and
//! returns the page's full content height so the app can clamp scrolling.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use folio_engine::anim::TextReveal;
use folio_types::Bounds;

use crate::effects;
use crate::theme::Palette;

pub mod about;
pub mod contact;
pub mod home;
pub mod projects;
pub mod skills;

/// Convert a screen rectangle into the hit map's coordinate space.
#[must_use]
pub fn bounds(rect: Rect) -> Bounds {
    Bounds::new(
        f32::from(rect.x),
        f32::from(rect.y),
        f32::from(rect.width),
        f32::from(rect.height),
    )
}

/// Lays a page out as a vertical flow of rows under a scroll offset.
///
/// Rows are positioned in logical content space; `row` returns the
/// on-screen rectangle for the next block (clipped to the viewport) or
/// `None` when it is scrolled entirely out of view. After the page is laid
/// out, `content_height` is the number the app needs for scroll clamping.
pub struct Flow {
    area: Rect,
    scroll: u16,
    cursor: u16,
}

impl Flow {
    #[must_use]
    pub fn new(area: Rect, scroll: u16) -> Self {
        Self {
            area,
            scroll,
            cursor: 0,
        }
    }

    /// Claim the next `height` rows of content space.
    pub fn row(&mut self, height: u16) -> Option<Rect> {
        let top = i32::from(self.cursor) - i32::from(self.scroll);
        self.cursor = self.cursor.saturating_add(height);
        let bottom = top + i32::from(height);
        if bottom <= 0 || top >= i32::from(self.area.height) {
            return None;
        }
        let clip_top = top.max(0) as u16;
        let clip_bottom = (bottom.min(i32::from(self.area.height))) as u16;
        Some(Rect::new(
            self.area.x,
            self.area.y + clip_top,
            self.area.width,
            clip_bottom - clip_top,
        ))
    }

    /// Blank separator rows.
    pub fn gap(&mut self, height: u16) {
        self.cursor = self.cursor.saturating_add(height);
    }

    #[must_use]
    pub fn content_height(&self) -> u16 {
        self.cursor
    }

    /// How far the page can scroll given the viewport it was laid out in.
    #[must_use]
    pub fn max_scroll(&self) -> u16 {
        self.cursor.saturating_sub(self.area.height)
    }
}

/// Render a staggered reveal as one styled line. Units fade from the
/// background color up to `color` as their progress advances.
#[must_use]
pub fn reveal_line(reveal: &TextReveal, palette: &Palette, color: Color) -> Line<'static> {
    let spans: Vec<Span<'static>> = reveal
        .units()
        .iter()
        .enumerate()
        .map(|(i, unit)| {
            let t = reveal.unit_progress(i);
            let fg = effects::blend(palette.bg_dark, color, t);
            Span::styled(unit.display().to_string(), Style::default().fg(fg))
        })
        .collect();
    Line::from(spans)
}

/// Fade a foreground color by an entry progress value.
#[must_use]
pub fn entry_color(palette: &Palette, color: Color, progress: f32) -> Color {
    effects::blend(palette.bg_dark, color, progress)
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit.
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Truncate to `max` columns with an ellipsis, respecting display width.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    use unicode_width::UnicodeWidthStr;
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let budget = max.saturating_sub(1);
    for ch in text.chars() {
        let next = format!("{out}{ch}");
        if next.width() > budget {
            break;
        }
        out = next;
    }
    out.push('…');
    out
}

/// Word-wrap plain text to `width` columns. Long words are hard-split.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    use unicode_width::UnicodeWidthStr;
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{line} {word}")
            };
            if candidate.width() <= width {
                line = candidate;
            } else {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                if word.width() <= width {
                    line = word.to_string();
                } else {
                    let mut chunk = String::new();
                    for ch in word.chars() {
                        if format!("{chunk}{ch}").width() > width {
                            lines.push(std::mem::take(&mut chunk));
                        }
                        chunk.push(ch);
                    }
                    line = chunk;
                }
            }
        }
        lines.push(line);
    }
    // A trailing blank from an empty paragraph is meaningful (spacing);
    // collapse only the case where the whole text was empty.
    if lines.iter().all(String::is_empty) {
        return Vec::new();
    }
    lines
}

/// Render one line of text into a one-row rect, clipped to its width.
pub fn draw_line(frame: &mut Frame, rect: Rect, line: Line<'_>) {
    use ratatui::widgets::Paragraph;
    frame.render_widget(Paragraph::new(line), rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_clips_rows_to_the_viewport() {
        let area = Rect::new(0, 5, 80, 10);
        let mut flow = Flow::new(area, 4);
        // First row is scrolled off.
        assert!(flow.row(3).is_none());
        // Second row straddles the top edge: three of its four rows remain.
        let partial = flow.row(4).expect("partially visible");
        assert_eq!(partial.y, 5);
        assert_eq!(partial.height, 3);
        flow.gap(20);
        assert!(flow.row(2).is_none());
        assert_eq!(flow.content_height(), 29);
        assert_eq!(flow.max_scroll(), 19);
    }

    #[test]
    fn flow_with_no_overflow_cannot_scroll() {
        let mut flow = Flow::new(Rect::new(0, 0, 80, 24), 0);
        flow.row(5);
        assert_eq!(flow.max_scroll(), 0);
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 10);
        assert!(lines.iter().all(|l| {
            use unicode_width::UnicodeWidthStr;
            l.width() <= 10
        }));
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("hello world", 8), "hello w…");
        assert_eq!(truncate("short", 8), "short");
    }

    #[test]
    fn truncate_to_zero_yields_nothing() {
        assert_eq!(truncate("hello", 0), "");
        assert_eq!(truncate("", 0), "");
        assert_eq!(truncate("hi", 1), "…");
    }

    #[test]
    fn centered_rect_is_centered() {
        let r = centered_rect(Rect::new(0, 0, 80, 24), 40, 10);
        assert_eq!(r, Rect::new(20, 7, 40, 10));
    }
}
