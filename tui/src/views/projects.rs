//! Projects page: the card grid and the pop-in detail overlay.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use folio_engine::{HitTarget, PageState, Project, ProjectsState, RenderParts};

use crate::effects;
use crate::theme::{Glyphs, Palette, styles};
use crate::views::{Flow, bounds, centered_rect, draw_line, entry_color, truncate, wrap_text};

const CARD_HEIGHT: u16 = 8;
const CARD_GAP: u16 = 1;

pub fn draw(
    frame: &mut Frame,
    parts: &mut RenderParts<'_>,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) -> u16 {
    let PageState::Projects(projects) = parts.page_state else {
        return 0;
    };
    let mut flow = Flow::new(area, parts.scroll.offset());

    flow.gap(1);
    if let Some(rect) = flow.row(1) {
        draw_line(
            frame,
            rect,
            Line::styled(parts.page.heading(), styles::heading(palette)),
        );
    }
    flow.gap(1);

    let columns = if area.width >= 72 { 2 } else { 1 };
    let card_width = (area.width.saturating_sub(CARD_GAP * (columns - 1))) / columns;

    let items = &parts.content.projects;
    for (row_index, row) in items.chunks(usize::from(columns)).enumerate() {
        if let Some(strip) = flow.row(CARD_HEIGHT) {
            for (col, project) in row.iter().enumerate() {
                let index = row_index * usize::from(columns) + col;
                let base = Rect::new(
                    strip.x + (card_width + CARD_GAP) * u16::try_from(col).unwrap_or(0),
                    strip.y,
                    card_width,
                    strip.height,
                );
                draw_card(frame, parts, projects, project, index, base, area, palette);
            }
        }
        flow.gap(CARD_GAP);
    }
    flow.gap(1);

    let max_scroll = flow.max_scroll();

    if let Some(overlay) = &projects.overlay {
        if let Some(project) = parts.content.projects.get(overlay.index) {
            draw_overlay(frame, parts, project, &overlay.effect, area, palette, glyphs);
        }
    }

    max_scroll
}

#[allow(clippy::too_many_arguments)]
fn draw_card(
    frame: &mut Frame,
    parts: &mut RenderParts<'_>,
    projects: &ProjectsState,
    project: &Project,
    index: usize,
    base: Rect,
    area: Rect,
    palette: &Palette,
) {
    let t = projects.entry.item_progress(index);
    let hovered = projects.hovered == Some(index);
    let selected = projects.selected == index;

    let rect = if hovered {
        effects::apply_tilt(&projects.tilt, base, area)
    } else {
        base
    };

    let border = if selected {
        palette.primary
    } else if hovered {
        palette.accent
    } else {
        entry_color(palette, palette.bg_border, t)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    if hovered {
        effects::spotlight_wash(frame.buffer_mut(), inner, &projects.spotlight, palette.primary);
    }

    let text_width = usize::from(inner.width);
    let mut lines = vec![Line::styled(
        truncate(&project.title, text_width),
        Style::default()
            .fg(entry_color(palette, palette.text_primary, t))
            .add_modifier(Modifier::BOLD),
    )];
    lines.extend(
        wrap_text(&project.description, text_width)
            .into_iter()
            .take(3)
            .map(|l| Line::styled(l, Style::default().fg(entry_color(palette, palette.text_muted, t)))),
    );
    while lines.len() < usize::from(inner.height.saturating_sub(1)) {
        lines.push(Line::default());
    }
    if !project.tags.is_empty() {
        let tags: Vec<Span> = project
            .tags
            .iter()
            .take(4)
            .map(|tag| {
                Span::styled(
                    format!(" {tag} "),
                    Style::default()
                        .fg(entry_color(palette, palette.purple, t))
                        .bg(palette.bg_highlight),
                )
            })
            .collect();
        let mut tag_line = Line::default();
        for (i, span) in tags.into_iter().enumerate() {
            if i > 0 {
                tag_line.push_span(Span::raw(" "));
            }
            tag_line.push_span(span);
        }
        lines.truncate(usize::from(inner.height.saturating_sub(1)));
        lines.push(tag_line);
    }

    frame.render_widget(Paragraph::new(lines), inner);
    parts.hits.record(HitTarget::ProjectCard(index), bounds(rect));
}

fn draw_overlay(
    frame: &mut Frame,
    parts: &mut RenderParts<'_>,
    project: &Project,
    effect: &folio_engine::anim::OverlayEffect,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let width = area.width.saturating_sub(4).clamp(20, 70);
    let text_width = usize::from(width.saturating_sub(4));

    let body = wrap_text(&project.detail_text(), text_width);
    let mut height = 2 + 1 + 1 + u16::try_from(body.len()).unwrap_or(u16::MAX);
    if project.tech_stack.is_some() {
        height += 2;
    }
    if !project.links.is_empty() {
        height += 2;
    }
    let base = centered_rect(area, width, height.min(area.height));
    let rect = effects::apply_overlay_effect(effect, base);

    frame.render_widget(Clear, rect);
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", truncate(&project.title, text_width)),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let close = Line::styled(format!(" {} ", glyphs.close), Style::default().fg(palette.danger))
        .right_aligned();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary))
        .style(Style::default().bg(palette.bg_popup))
        .title(title)
        .title(close);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let mut lines = vec![Line::default()];
    lines.extend(
        body.into_iter()
            .map(|l| Line::styled(l, Style::default().fg(palette.text_secondary))),
    );
    if let Some(stack) = &project.tech_stack {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Stack: ", Style::default().fg(palette.text_muted)),
            Span::styled(stack.join(", "), Style::default().fg(palette.accent)),
        ]));
    }
    if !project.links.is_empty() {
        lines.push(Line::default());
        let mut link_line = Line::default();
        for (i, link) in project.links.iter().enumerate() {
            if i > 0 {
                link_line.push_span(Span::styled("  ", Style::default()));
            }
            link_line.push_span(Span::styled(
                format!("{} {}", glyphs.arrow_right, link.label),
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::UNDERLINED),
            ));
        }
        lines.push(link_line);
    }
    frame.render_widget(Paragraph::new(lines), inner);

    // The body swallows clicks; only the close glyph (top-right corner)
    // and the backdrop dismiss.
    parts.hits.record(HitTarget::OverlayBody, bounds(rect));
    let close_rect = Rect::new(rect.right().saturating_sub(5), rect.y, 5, 1);
    parts.hits.record(HitTarget::OverlayClose, bounds(close_rect));
}
