//! Terminal rendering for Folio.
//!
//! [`draw`] renders one frame from the engine's state and records every
//! interactive region into the frame's hit map, which the engine resolves
//! mouse events against on the following frame.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use folio_engine::{App, HitTarget, Page, RenderParts};

pub mod effects;
pub mod input;
pub mod theme;
pub mod views;

pub use input::{InputPump, handle_events};

use theme::{Glyphs, Palette, glyphs, palette, styles};
use views::bounds;

/// Minimum width for the full nav bar; below it the compact menu is used.
const WIDE_NAV_MIN_WIDTH: u16 = 80;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.resize_background(area.width, area.height);

    let max_scroll;
    {
        let mut parts = app.render_parts();
        let palette = palette(parts.options);
        let glyphs = glyphs(parts.options);

        frame.render_widget(
            Block::default().style(Style::default().bg(palette.bg_dark)),
            area,
        );
        effects::draw_background(frame.buffer_mut(), area, parts.background, &palette, &glyphs);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Nav
                Constraint::Min(1),    // Page body
                Constraint::Length(1), // Footer
            ])
            .split(area);

        draw_nav(frame, &mut parts, chunks[0], &palette, &glyphs);

        // The enter transition slides the body up from a small offset.
        let mut body = chunks[1].inner(ratatui::layout::Margin {
            horizontal: 2,
            vertical: 0,
        });
        if let Some(effect) = parts.page_effect {
            let offset = effects::page_enter_offset(effect);
            body.y = body.y.saturating_add(offset).min(body.bottom());
            body.height = body.height.saturating_sub(offset);
        }
        max_scroll = draw_body(frame, &mut parts, body, &palette, &glyphs);

        draw_footer(frame, &parts, chunks[2], &palette, &glyphs);

        if parts.menu_open {
            draw_menu(frame, &mut parts, chunks[0], &palette, &glyphs);
        }
    }
    app.set_scroll_max(max_scroll);
}

fn draw_body(
    frame: &mut Frame,
    parts: &mut RenderParts<'_>,
    body: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) -> u16 {
    match parts.page {
        Page::Home => views::home::draw(frame, parts, body, palette, glyphs),
        Page::About => views::about::draw(frame, parts, body, palette, glyphs),
        Page::Projects => views::projects::draw(frame, parts, body, palette, glyphs),
        Page::Skills => views::skills::draw(frame, parts, body, palette),
        Page::Contact => views::contact::draw(frame, parts, body, palette, glyphs),
    }
}

fn draw_nav(
    frame: &mut Frame,
    parts: &mut RenderParts<'_>,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_dark));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Logo, initials derived from the profile name.
    let initials: String = parts
        .content
        .profile
        .name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect();
    let logo_text = format!(" {} {initials} ", glyphs.logo);
    let logo_width = u16::try_from(logo_text.chars().count()).unwrap_or(u16::MAX);
    let logo_rect = Rect::new(inner.x + 1, inner.y, logo_width.min(inner.width), 1);
    frame.render_widget(
        Paragraph::new(Line::styled(
            logo_text,
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )),
        logo_rect,
    );
    parts.hits.record(HitTarget::Logo, bounds(logo_rect));

    if area.width >= WIDE_NAV_MIN_WIDTH {
        // Right-aligned row of page buttons.
        let total: u16 = Page::ALL
            .iter()
            .map(|p| u16::try_from(p.label().chars().count()).unwrap_or(u16::MAX) + 4)
            .sum();
        let mut x = inner.right().saturating_sub(total + 1);
        for page in Page::ALL {
            let label = format!("  {}  ", page.label());
            let width = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
            let rect = Rect::new(x, inner.y, width, 1);
            x = x.saturating_add(width);
            let style = if page == parts.page {
                styles::nav_active(palette)
            } else {
                styles::nav_inactive(palette)
            };
            frame.render_widget(Paragraph::new(Line::styled(label, style)), rect);
            parts.hits.record(HitTarget::Nav(page), bounds(rect));
        }
    } else {
        let toggle = format!(" {} ", if parts.menu_open { glyphs.close } else { glyphs.menu });
        let width = u16::try_from(toggle.chars().count()).unwrap_or(u16::MAX);
        let rect = Rect::new(inner.right().saturating_sub(width + 1), inner.y, width, 1);
        frame.render_widget(
            Paragraph::new(Line::styled(
                toggle,
                Style::default().fg(palette.text_primary),
            )),
            rect,
        );
        parts.hits.record(HitTarget::MenuToggle, bounds(rect));
    }
}

/// Compact-menu dropdown, anchored under the nav's right edge.
fn draw_menu(
    frame: &mut Frame,
    parts: &mut RenderParts<'_>,
    nav: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let width = 18u16.min(nav.width);
    let height = u16::try_from(Page::ALL.len()).unwrap_or(u16::MAX) + 2;
    let rect = Rect::new(
        nav.right().saturating_sub(width + 1),
        nav.bottom().saturating_sub(1),
        width,
        height,
    );
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary))
        .style(Style::default().bg(palette.bg_popup));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    for (i, page) in Page::ALL.into_iter().enumerate() {
        let row = Rect::new(
            inner.x,
            inner.y + u16::try_from(i).unwrap_or(u16::MAX),
            inner.width,
            1,
        );
        if row.bottom() > inner.bottom() {
            break;
        }
        let marker = if page == parts.page { glyphs.selected } else { " " };
        let style = if page == parts.page {
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_secondary)
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{marker} "), style),
                Span::styled(page.label().to_string(), style),
            ])),
            row,
        );
        parts.hits.record(HitTarget::MenuItem(page), bounds(row));
    }
}

fn draw_footer(
    frame: &mut Frame,
    parts: &RenderParts<'_>,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    use chrono::Datelike;

    let year = chrono::Local::now().year();
    let left = Line::from(vec![
        Span::styled(
            format!(" © {year} {} ", parts.content.profile.name),
            Style::default().fg(palette.text_muted),
        ),
        Span::styled(glyphs.dot, Style::default().fg(palette.bg_border)),
        Span::styled(
            format!(" {}", parts.content.profile.email),
            Style::default().fg(palette.text_disabled),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(left).style(Style::default().bg(palette.bg_dark)),
        area,
    );

    let hints = Line::from(vec![
        Span::styled("1-5", styles::key_highlight(palette)),
        Span::styled(" pages  ", styles::key_hint(palette)),
        Span::styled("j/k", styles::key_highlight(palette)),
        Span::styled(" scroll  ", styles::key_hint(palette)),
        Span::styled("q", styles::key_highlight(palette)),
        Span::styled(" quit ", styles::key_hint(palette)),
    ]);
    frame.render_widget(Paragraph::new(hints).right_aligned(), area);
}
