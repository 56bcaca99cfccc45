//! About page: bio plus the experience, education, and certification
//! timelines, entering with a top-to-bottom stagger.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use folio_engine::{PageState, RenderParts};

use crate::theme::{Glyphs, Palette, styles};
use crate::views::{Flow, draw_line, entry_color, wrap_text};

pub fn draw(
    frame: &mut Frame,
    parts: &mut RenderParts<'_>,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) -> u16 {
    let PageState::About(about) = parts.page_state else {
        return 0;
    };
    let info = &parts.content.about;
    let mut flow = Flow::new(area, parts.scroll.offset());
    let wrap_width = usize::from(area.width.saturating_sub(4)).min(72);

    // Items are numbered in visual order so the stagger runs down the page.
    let mut item = 0usize;

    flow.gap(1);
    if let Some(rect) = flow.row(1) {
        draw_line(
            frame,
            rect,
            Line::styled(parts.page.heading(), styles::heading(palette)),
        );
    }
    flow.gap(1);

    for line in wrap_text(&parts.content.profile.bio, wrap_width) {
        if let Some(rect) = flow.row(1) {
            draw_line(
                frame,
                rect,
                Line::styled(line, Style::default().fg(palette.text_secondary)),
            );
        }
    }
    flow.gap(1);

    section_heading(frame, &mut flow, "Experience", palette);
    for exp in &info.experience {
        let t = about.entry.item_progress(item);
        item += 1;
        if let Some(rect) = flow.row(1) {
            let line = Line::from(vec![
                Span::styled(
                    format!("{} ", glyphs.diamond),
                    Style::default().fg(entry_color(palette, palette.primary, t)),
                ),
                Span::styled(
                    exp.title.clone(),
                    Style::default()
                        .fg(entry_color(palette, palette.text_primary, t))
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            draw_line(frame, rect, line);
        }
        for line in wrap_text(&exp.description, wrap_width.saturating_sub(2)) {
            if let Some(rect) = flow.row(1) {
                let line = Line::from(vec![
                    Span::styled(format!("{} ", glyphs.timeline), Style::default().fg(palette.bg_border)),
                    Span::styled(line, Style::default().fg(entry_color(palette, palette.text_muted, t))),
                ]);
                draw_line(frame, rect, line);
            }
        }
        flow.gap(1);
    }

    section_heading(frame, &mut flow, "Education", palette);
    for edu in &info.education {
        let t = about.entry.item_progress(item);
        item += 1;
        if let Some(rect) = flow.row(1) {
            let line = Line::from(vec![
                Span::styled(
                    format!("{} ", glyphs.diamond),
                    Style::default().fg(entry_color(palette, palette.purple, t)),
                ),
                Span::styled(
                    edu.title.clone(),
                    Style::default()
                        .fg(entry_color(palette, palette.text_primary, t))
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            draw_line(frame, rect, line);
        }
        if let Some(rect) = flow.row(1) {
            let line = Line::from(vec![
                Span::styled(format!("{} ", glyphs.timeline), Style::default().fg(palette.bg_border)),
                Span::styled(
                    format!("{} — {}", edu.institution, edu.details),
                    Style::default().fg(entry_color(palette, palette.text_muted, t)),
                ),
            ]);
            draw_line(frame, rect, line);
        }
        flow.gap(1);
    }

    if !info.research.is_empty() {
        section_heading(frame, &mut flow, "Research", palette);
        if !info.research_intro.is_empty() {
            for line in wrap_text(&info.research_intro, wrap_width) {
                if let Some(rect) = flow.row(1) {
                    draw_line(
                        frame,
                        rect,
                        Line::styled(line, Style::default().fg(palette.text_secondary)),
                    );
                }
            }
            flow.gap(1);
        }
        let t = about.entry.item_progress(item);
        item += 1;
        if let Some(strip) = flow.row(4) {
            draw_research_cells(frame, strip, &info.research, palette, t);
        }
        flow.gap(1);
    }

    if !info.certifications.is_empty() {
        section_heading(frame, &mut flow, "Certifications", palette);
        for cert in &info.certifications {
            let t = about.entry.item_progress(item);
            item += 1;
            if let Some(rect) = flow.row(1) {
                let line = Line::from(vec![
                    Span::styled(
                        format!("{} ", glyphs.bullet),
                        Style::default().fg(entry_color(palette, palette.accent, t)),
                    ),
                    Span::styled(
                        cert.clone(),
                        Style::default().fg(entry_color(palette, palette.text_secondary, t)),
                    ),
                ]);
                draw_line(frame, rect, line);
            }
        }
        flow.gap(1);
    }

    flow.max_scroll()
}

/// Research focus cells laid out side by side, title over detail.
fn draw_research_cells(
    frame: &mut Frame,
    strip: Rect,
    areas: &[folio_types::ResearchArea],
    palette: &Palette,
    t: f32,
) {
    let count = u16::try_from(areas.len()).unwrap_or(u16::MAX).max(1);
    let cell_width = (strip.width / count).min(28);
    if cell_width < 8 {
        return;
    }
    for (i, research) in areas.iter().enumerate() {
        let x = strip.x + u16::try_from(i).unwrap_or(u16::MAX) * (cell_width + 2);
        if x + cell_width > strip.right() {
            break;
        }
        let rect = Rect::new(x, strip.y, cell_width, strip.height);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(entry_color(palette, palette.bg_border, t)))
            .style(Style::default().bg(palette.bg_panel));
        let lines = vec![
            Line::styled(
                research.title.clone(),
                Style::default()
                    .fg(entry_color(palette, palette.primary, t))
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                research.detail.clone(),
                Style::default().fg(entry_color(palette, palette.text_muted, t)),
            ),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), rect);
    }
}

fn section_heading(frame: &mut Frame, flow: &mut Flow, title: &str, palette: &Palette) {
    if let Some(rect) = flow.row(1) {
        draw_line(
            frame,
            rect,
            Line::styled(
                title.to_uppercase(),
                Style::default()
                    .fg(palette.text_muted)
                    .add_modifier(Modifier::BOLD),
            ),
        );
    }
    flow.gap(1);
}
