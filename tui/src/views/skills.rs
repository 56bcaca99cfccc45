//! Skills page: categorized grid of skill cells.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use folio_engine::{HitTarget, PageState, RenderParts};

use crate::theme::{Palette, styles};
use crate::views::{Flow, bounds, draw_line, entry_color, truncate};

const CELL_WIDTH: u16 = 18;
const CELL_HEIGHT: u16 = 3;
const CELL_GAP: u16 = 1;

pub fn draw(
    frame: &mut Frame,
    parts: &mut RenderParts<'_>,
    area: Rect,
    palette: &Palette,
) -> u16 {
    let PageState::Skills(skills) = parts.page_state else {
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

    let columns = usize::from((area.width + CELL_GAP) / (CELL_WIDTH + CELL_GAP)).max(1);

    for (cat_index, category) in parts.content.skill_categories.iter().enumerate() {
        let t = skills.entry.item_progress(cat_index);

        if let Some(rect) = flow.row(1) {
            draw_line(
                frame,
                rect,
                Line::styled(
                    category.title.to_uppercase(),
                    Style::default()
                        .fg(entry_color(palette, palette.text_muted, t))
                        .add_modifier(Modifier::BOLD),
                ),
            );
        }
        flow.gap(1);

        for (row_index, row) in category.skills.chunks(columns).enumerate() {
            if let Some(strip) = flow.row(CELL_HEIGHT) {
                for (col, skill) in row.iter().enumerate() {
                    let skill_index = row_index * columns + col;
                    let rect = Rect::new(
                        strip.x + (CELL_WIDTH + CELL_GAP) * u16::try_from(col).unwrap_or(0),
                        strip.y,
                        CELL_WIDTH.min(area.width),
                        strip.height,
                    );
                    let hovered = skills.hovered == Some((cat_index, skill_index));

                    let (border, fg) = if hovered {
                        (palette.primary, palette.text_primary)
                    } else {
                        (
                            entry_color(palette, palette.bg_border, t),
                            entry_color(palette, palette.text_secondary, t),
                        )
                    };
                    let block = Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(border))
                        .style(Style::default().bg(if hovered {
                            palette.bg_highlight
                        } else {
                            palette.bg_panel
                        }));
                    let inner = block.inner(rect);
                    frame.render_widget(block, rect);

                    let line = Line::from(vec![
                        Span::styled(
                            format!("{} ", skill.monogram()),
                            Style::default()
                                .fg(entry_color(palette, palette.accent, t))
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            truncate(&skill.name, usize::from(inner.width).saturating_sub(2)),
                            Style::default().fg(fg),
                        ),
                    ]);
                    frame.render_widget(Paragraph::new(line), inner);
                    parts
                        .hits
                        .record(HitTarget::SkillCell(cat_index, skill_index), bounds(rect));
                }
            }
            flow.gap(CELL_GAP);
        }
        flow.gap(1);
    }

    flow.max_scroll()
}
