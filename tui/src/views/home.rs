//! Hero page: badge, name, tagline, action buttons, and the typewriter
//! terminal window.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use folio_engine::anim::{parallax_offset, scroll_progress};
use folio_engine::{HitTarget, HomeState, RenderParts, Vec2};

use crate::effects;
use crate::theme::{Glyphs, Palette};
use crate::views::{Flow, bounds, draw_line, reveal_line, wrap_text};

const BUTTON_LABELS: [&str; 2] = ["View Projects", "Get in Touch"];

pub fn draw(
    frame: &mut Frame,
    parts: &mut RenderParts<'_>,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) -> u16 {
    let folio_engine::PageState::Home(home) = parts.page_state else {
        return 0;
    };
    let profile = &parts.content.profile;
    let mut flow = Flow::new(area, parts.scroll.offset());

    flow.gap(1);

    // Status badge, revealed one grapheme at a time.
    if let Some(rect) = flow.row(1) {
        let pulse_color = effects::blend(palette.bg_dark, palette.success, parts.pulse);
        let mut line = Line::default();
        line.push_span(Span::styled(
            format!("{} ", glyphs.dot),
            Style::default().fg(pulse_color),
        ));
        line.spans
            .extend(reveal_line(&home.badge, palette, palette.success).spans);
        draw_line(frame, rect, line);
    }
    flow.gap(1);

    if let Some(rect) = flow.row(1) {
        draw_line(
            frame,
            rect,
            Line::styled(
                profile.name.clone(),
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            ),
        );
    }
    if let Some(rect) = flow.row(1) {
        draw_line(frame, rect, reveal_line(&home.tagline, palette, palette.purple));
    }
    flow.gap(1);

    let bio_width = usize::from(area.width.saturating_sub(2)).min(72);
    for line in wrap_text(&profile.bio, bio_width) {
        if let Some(rect) = flow.row(1) {
            draw_line(
                frame,
                rect,
                Line::styled(line, Style::default().fg(palette.text_secondary)),
            );
        }
    }
    flow.gap(1);

    draw_buttons(frame, parts, home, &mut flow, area, palette, glyphs);
    flow.gap(1);

    draw_features(frame, parts, &mut flow, area, palette, glyphs);
    flow.gap(1);

    draw_terminal(frame, parts, home, &mut flow, area, palette, glyphs);
    flow.gap(1);

    flow.max_scroll()
}

fn draw_buttons(
    frame: &mut Frame,
    parts: &mut RenderParts<'_>,
    home: &HomeState,
    flow: &mut Flow,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let Some(strip) = flow.row(3) else {
        return;
    };
    let mut x = strip.x;
    for (i, label) in BUTTON_LABELS.iter().enumerate() {
        let text = if i == 0 {
            format!(" {label} {} ", glyphs.arrow_right)
        } else {
            format!(" {label} ")
        };
        let width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX) + 2;
        let base = Rect::new(x, strip.y, width.min(area.width), strip.height);
        x = x.saturating_add(width + 2);

        let offset = home.buttons.get(i).map(|m| m.offset()).unwrap_or_default();
        let rect = effects::displace(base, offset, area);
        let hovered = home.buttons.get(i).is_some_and(|m| m.is_hovered());

        let (fg, bg, border) = if i == 0 {
            (palette.bg_dark, palette.primary, palette.primary)
        } else if hovered {
            (palette.text_primary, palette.bg_highlight, palette.primary)
        } else {
            (palette.text_secondary, palette.bg_panel, palette.bg_border)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(bg));
        frame.render_widget(
            Paragraph::new(Line::styled(text, Style::default().fg(fg))).block(block),
            rect,
        );
        parts.hits.record(HitTarget::HeroButton(i), bounds(rect));
    }
}

/// Capability labels under the action row. Each drifts with scroll at its
/// own parallax offset, alternating direction like the original trio.
fn draw_features(
    frame: &mut Frame,
    parts: &RenderParts<'_>,
    flow: &mut Flow,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let features = &parts.content.profile.features;
    if features.is_empty() {
        return;
    }
    let top = flow.content_height();
    let Some(strip) = flow.row(1) else {
        return;
    };

    let offsets = [2.0_f32, -2.0, 3.0];
    let colors = [palette.primary, palette.purple, palette.accent];
    let progress = scroll_progress(
        f32::from(top),
        1.0,
        f32::from(parts.scroll.offset()),
        f32::from(area.height),
    );

    let mut x = strip.x;
    for (i, label) in features.iter().enumerate() {
        let text = format!("{} {label}", glyphs.diamond);
        let width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let base = Rect::new(x, strip.y, width.min(area.width), 1);
        x = x.saturating_add(width + 4);
        if base.right() > area.right() {
            break;
        }

        let drift = parallax_offset(progress, offsets[i % offsets.len()]);
        let rect = effects::displace(base, Vec2::new(drift, 0.0), area);
        frame.render_widget(
            Paragraph::new(Line::styled(
                text,
                Style::default().fg(colors[i % colors.len()]),
            )),
            rect,
        );
    }
}

fn draw_terminal(
    frame: &mut Frame,
    parts: &RenderParts<'_>,
    home: &HomeState,
    flow: &mut Flow,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let profile = &parts.content.profile;
    let code_rows = u16::try_from(profile.terminal_code.lines().count()).unwrap_or(u16::MAX);
    // Code lines, borders, and one spare row for the status pulse.
    let height = code_rows + 3;
    let top = flow.content_height();
    let Some(rect) = flow.row(height) else {
        return;
    };

    // The terminal window drifts sideways a little as the page scrolls.
    let progress = scroll_progress(
        f32::from(top),
        f32::from(height),
        f32::from(parts.scroll.offset()),
        f32::from(area.height),
    );
    let drift = parallax_offset(progress, 3.0);
    let rect = effects::displace(rect, Vec2::new(drift, 0.0), area);

    let title = Line::from(vec![
        Span::styled(format!(" {} ", glyphs.window_buttons), Style::default().fg(palette.danger)),
        Span::styled(profile.terminal_title.clone(), Style::default().fg(palette.text_muted)),
        Span::raw(" "),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_popup))
        .title(title);

    let mut lines: Vec<Line> = home
        .typewriter
        .visible()
        .lines()
        .map(|l| highlight_code(l, palette))
        .collect();
    if home.blink.is_visible() {
        match lines.last_mut() {
            Some(last) => last.push_span(Span::styled(
                glyphs.cursor,
                Style::default().fg(palette.text_primary),
            )),
            None => lines.push(Line::styled(
                glyphs.cursor,
                Style::default().fg(palette.text_primary),
            )),
        }
    }

    let inner = block.inner(rect);
    frame.render_widget(block, rect);
    frame.render_widget(Paragraph::new(lines), inner);

    // Status pulse in the bottom-right corner of the window.
    if inner.height > 0 {
        let online = effects::blend(palette.bg_popup, palette.success, parts.pulse);
        let status = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
        frame.render_widget(
            Paragraph::new(Line::styled(
                format!("{} SYSTEM ONLINE", glyphs.dot),
                Style::default().fg(online),
            ))
            .right_aligned(),
            status,
        );
    }
}

/// Keyword coloring for the terminal code sample: the handful of Python
/// keywords the original tints, plus dimmed comment lines.
fn highlight_code(line: &str, palette: &Palette) -> Line<'static> {
    if line.trim_start().starts_with('#') {
        return Line::from(Span::styled(
            line.to_string(),
            Style::default().fg(palette.text_muted),
        ));
    }

    let base = Style::default().fg(palette.accent);
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut word = String::new();
    let mut other = String::new();
    for ch in line.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            if !other.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut other), base));
            }
            word.push(ch);
        } else {
            if !word.is_empty() {
                spans.push(word_span(std::mem::take(&mut word), palette));
            }
            other.push(ch);
        }
    }
    if !word.is_empty() {
        spans.push(word_span(word, palette));
    }
    if !other.is_empty() {
        spans.push(Span::styled(other, base));
    }
    Line::from(spans)
}

fn word_span(word: String, palette: &Palette) -> Span<'static> {
    let style = match word.as_str() {
        "import" | "class" | "def" | "return" => Style::default().fg(palette.purple),
        "self" => Style::default().fg(palette.orange),
        _ => Style::default().fg(palette.accent),
    };
    Span::styled(word, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_and_self_get_their_own_colors() {
        let palette = Palette::standard();
        let line = highlight_code("    def forward(self, problem):", &palette);
        let style_of = |text: &str| {
            line.spans
                .iter()
                .find(|s| s.content == text)
                .map(|s| s.style)
                .expect("token present")
        };
        assert_eq!(style_of("def").fg, Some(palette.purple));
        assert_eq!(style_of("self").fg, Some(palette.orange));
        assert_eq!(style_of("forward").fg, Some(palette.accent));
        assert_ne!(style_of("def"), style_of("forward"));
    }

    #[test]
    fn comment_lines_render_dimmed() {
        let palette = Palette::standard();
        let line = highlight_code("# Initializing AI Engineer...", &palette);
        assert!(
            line.spans
                .iter()
                .all(|s| s.style.fg == Some(palette.text_muted))
        );
    }

    #[test]
    fn reassembled_line_loses_no_text() {
        let palette = Palette::standard();
        let source = "model = RagunathNet()";
        let line = highlight_code(source, &palette);
        let joined: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(joined, source);
    }
}
