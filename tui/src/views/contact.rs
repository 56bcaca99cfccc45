//! Contact page: the inert form plus social links.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use folio_engine::{ContactState, FormFocus, HitTarget, PageState, RenderParts};

use crate::effects;
use crate::theme::{Glyphs, Palette, social_glyph, styles};
use crate::views::{Flow, bounds, draw_line, wrap_text};

const FIELD_HEIGHT: u16 = 3;
const MESSAGE_HEIGHT: u16 = 5;

pub fn draw(
    frame: &mut Frame,
    parts: &mut RenderParts<'_>,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) -> u16 {
    let PageState::Contact(contact) = parts.page_state else {
        return 0;
    };
    let profile = &parts.content.profile;
    let mut flow = Flow::new(area, parts.scroll.offset());
    let form_width = area.width.clamp(20, 60);

    flow.gap(1);
    if let Some(rect) = flow.row(1) {
        draw_line(
            frame,
            rect,
            Line::styled(parts.page.heading(), styles::heading(palette)),
        );
    }
    flow.gap(1);

    if let Some(rect) = flow.row(1) {
        draw_line(
            frame,
            rect,
            Line::from(vec![
                Span::styled("Email    ", Style::default().fg(palette.text_muted)),
                Span::styled(profile.email.clone(), Style::default().fg(palette.accent)),
            ]),
        );
    }
    if !profile.whatsapp.is_empty()
        && let Some(rect) = flow.row(1)
    {
        draw_line(
            frame,
            rect,
            Line::from(vec![
                Span::styled("WhatsApp ", Style::default().fg(palette.text_muted)),
                Span::styled(profile.whatsapp.clone(), Style::default().fg(palette.accent)),
            ]),
        );
    }
    flow.gap(1);

    field(frame, parts, contact, &mut flow, form_width, FormFocus::Name, "Name", palette, glyphs);
    field(frame, parts, contact, &mut flow, form_width, FormFocus::Email, "Email", palette, glyphs);
    field(
        frame, parts, contact, &mut flow, form_width, FormFocus::Message, "Message", palette,
        glyphs,
    );

    // Submit. Deliberately goes nowhere; the hint says as much.
    if let Some(strip) = flow.row(FIELD_HEIGHT) {
        let rect = Rect::new(strip.x, strip.y, 16.min(form_width), strip.height);
        let focused = contact.focus == FormFocus::Submit;
        let (fg, bg) = if focused {
            (palette.bg_dark, palette.primary)
        } else {
            (palette.text_secondary, palette.bg_panel)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused {
                palette.primary
            } else {
                palette.bg_border
            }))
            .style(Style::default().bg(bg));
        frame.render_widget(
            Paragraph::new(Line::styled(
                " Send Message ",
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            ))
            .block(block),
            rect,
        );
        parts.hits.record(HitTarget::Submit, bounds(rect));

        let hint = Rect::new(
            rect.right().saturating_add(2).min(area.right()),
            strip.y + 1,
            area.right().saturating_sub(rect.right().saturating_add(2)),
            1,
        );
        if hint.width > 0 {
            draw_line(
                frame,
                hint,
                Line::styled("(demo form, nothing is sent)", styles::key_hint(palette)),
            );
        }
    }
    flow.gap(1);

    // Social buttons with the same pointer attraction as the hero actions.
    if let Some(strip) = flow.row(FIELD_HEIGHT) {
        let mut x = strip.x;
        for (i, social) in profile.socials.iter().enumerate() {
            let glyph = social_glyph(social.kind, parts.options);
            let text = format!(" {glyph} {} ", social.label);
            let width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX) + 3;
            let base = Rect::new(x, strip.y, width.min(area.width), strip.height);
            x = x.saturating_add(width + 1);
            if base.right() > area.right() {
                break;
            }

            let offset = contact.socials.get(i).map(|m| m.offset()).unwrap_or_default();
            let rect = effects::displace(base, offset, area);
            let hovered = contact.socials.get(i).is_some_and(|m| m.is_hovered());

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if hovered {
                    palette.primary
                } else {
                    palette.bg_border
                }))
                .style(Style::default().bg(palette.bg_panel));
            frame.render_widget(
                Paragraph::new(Line::styled(
                    text,
                    Style::default().fg(if hovered {
                        palette.text_primary
                    } else {
                        palette.text_secondary
                    }),
                ))
                .block(block),
                rect,
            );
            parts.hits.record(HitTarget::Social(i), bounds(rect));
        }
    }
    flow.gap(1);

    flow.max_scroll()
}

#[allow(clippy::too_many_arguments)]
fn field(
    frame: &mut Frame,
    parts: &mut RenderParts<'_>,
    contact: &ContactState,
    flow: &mut Flow,
    form_width: u16,
    focus: FormFocus,
    label: &str,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let height = if focus == FormFocus::Message {
        MESSAGE_HEIGHT
    } else {
        FIELD_HEIGHT
    };
    let Some(strip) = flow.row(height) else {
        flow.gap(1);
        return;
    };
    let rect = Rect::new(strip.x, strip.y, form_width, strip.height);
    let focused = contact.focus == focus;

    let value = match focus {
        FormFocus::Name => contact.name.as_str(),
        FormFocus::Email => contact.email.as_str(),
        FormFocus::Message => contact.message.as_str(),
        FormFocus::Submit => "",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            palette.primary
        } else {
            palette.bg_border
        }))
        .style(Style::default().bg(palette.bg_panel))
        .title(Span::styled(
            format!(" {label} "),
            Style::default().fg(if focused {
                palette.primary
            } else {
                palette.text_muted
            }),
        ));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let width = usize::from(inner.width).saturating_sub(1);
    let mut lines: Vec<Line> = if focus == FormFocus::Message {
        wrap_text(value, width)
            .into_iter()
            .rev()
            .take(usize::from(inner.height))
            .rev()
            .map(|l| Line::styled(l, Style::default().fg(palette.text_primary)))
            .collect()
    } else {
        // Single-line fields keep the tail visible while typing.
        let shown = if value.chars().count() > width {
            let skip = value.chars().count() - width;
            value.chars().skip(skip).collect()
        } else {
            value.to_string()
        };
        vec![Line::styled(shown, Style::default().fg(palette.text_primary))]
    };
    if focused {
        match lines.last_mut() {
            Some(last) => last.push_span(Span::styled(
                glyphs.cursor,
                Style::default().fg(palette.primary),
            )),
            None => lines.push(Line::styled(
                glyphs.cursor,
                Style::default().fg(palette.primary),
            )),
        }
    }
    frame.render_widget(Paragraph::new(lines), inner);
    parts.hits.record(HitTarget::FormField(focus), bounds(rect));
    flow.gap(1);
}
