//! Applying animation state to rectangles and cells.
//!
//! The engine computes motion in continuous cell space; this module maps it
//! onto `Rect`s and the frame buffer. Rotation has no terminal equivalent,
//! so tilt renders as a small translation plus the hover/press scale.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

use folio_engine::anim::{OverlayEffect, OverlayEffectKind, PageEffect, Spotlight, Tilt, ease_out_cubic};
use folio_engine::{Background, Depth, Vec2};

use crate::theme::{Glyphs, Palette};

/// Rows the page body is still offset by during its enter transition.
#[must_use]
pub fn page_enter_offset(effect: &PageEffect) -> u16 {
    let t = ease_out_cubic(effect.progress());
    ((1.0 - t) * PageEffect::ENTER_OFFSET).round() as u16
}

/// Apply the overlay open effect to its target rectangle.
#[must_use]
pub fn apply_overlay_effect(effect: &OverlayEffect, base: Rect) -> Rect {
    match effect.kind() {
        OverlayEffectKind::PopScale => {
            let t = ease_out_cubic(effect.progress());
            let scale = 0.6 + 0.4 * t;
            scale_rect(base, scale)
        }
    }
}

/// Shift `base` by a fractional displacement, clamped to `within`.
#[must_use]
pub fn displace(base: Rect, offset: Vec2, within: Rect) -> Rect {
    let min_x = i32::from(within.x);
    let max_x = (i32::from(within.x) + i32::from(within.width) - i32::from(base.width)).max(min_x);
    let min_y = i32::from(within.y);
    let max_y =
        (i32::from(within.y) + i32::from(within.height) - i32::from(base.height)).max(min_y);

    let x = (i32::from(base.x) + offset.x.round() as i32).clamp(min_x, max_x);
    let y = (i32::from(base.y) + offset.y.round() as i32).clamp(min_y, max_y);
    Rect {
        x: x as u16,
        y: y as u16,
        ..base
    }
}

/// Terminal rendition of the tilt transform: rotation becomes a 1-2 cell
/// lean toward the pointer, hover/press become a uniform scale.
#[must_use]
pub fn apply_tilt(tilt: &Tilt, base: Rect, within: Rect) -> Rect {
    let rotation = tilt.rotation();
    // rotate_y leans horizontally, rotate_x vertically; a full 12 degrees
    // maps to two columns / one row.
    let lean = Vec2::new(rotation.y / 6.0, -rotation.x / 12.0);
    let scaled = scale_rect(base, tilt.scale());
    displace(scaled, lean, within)
}

fn scale_rect(base: Rect, scale: f32) -> Rect {
    let width = (f32::from(base.width) * scale).round() as u16;
    let height = (f32::from(base.height) * scale).round() as u16;
    let width = width.max(1).min(base.width.max(1));
    let height = height.max(1).min(base.height.max(1));
    let x = base.x + (base.width.saturating_sub(width) / 2);
    let y = base.y + (base.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Linear blend between two RGB colors. Non-RGB colors (high-contrast
/// palette) pass through unchanged.
#[must_use]
pub fn blend(base: Color, highlight: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (base, highlight) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let mix = |a: u8, b: u8| -> u8 {
                (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
            };
            Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
        }
        _ => base,
    }
}

/// Paint the soft radial highlight over `area`.
///
/// The highlight center is the spotlight position relative to the area's
/// top-left; intensity falls off linearly with distance and is scaled by
/// the fade opacity.
pub fn spotlight_wash(buf: &mut Buffer, area: Rect, spotlight: &Spotlight, highlight: Color) {
    if !spotlight.is_visible() || area.width == 0 || area.height == 0 {
        return;
    }
    let center = spotlight.position();
    let cx = f32::from(area.x) + center.x;
    let cy = f32::from(area.y) + center.y;
    // Terminal cells are roughly twice as tall as wide; correct the
    // vertical distance so the glow reads as a circle.
    let radius = f32::from(area.width.max(area.height * 2)).max(1.0);
    let strength = 0.35 * spotlight.opacity();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let dx = f32::from(x) - cx;
            let dy = (f32::from(y) - cy) * 2.0;
            let d = dx.hypot(dy);
            let t = strength * (1.0 - d / radius).max(0.0);
            if t <= 0.0 {
                continue;
            }
            let cell = &mut buf[(x, y)];
            cell.bg = blend(cell.bg, highlight, t);
        }
    }
}

/// Paint the ambient voxel field across `area` (drawn before content).
pub fn draw_background(
    buf: &mut Buffer,
    area: Rect,
    background: &Background,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    for voxel in background.voxels() {
        let x = voxel.x.round() as u16;
        let y = voxel.y.round() as u16;
        if x < area.left() || x >= area.right() || y < area.top() || y >= area.bottom() {
            continue;
        }
        let (symbol, color) = match voxel.depth {
            Depth::Far => (glyphs.voxel_far, palette.bg_border),
            Depth::Mid => (glyphs.voxel_mid, palette.primary_dim),
            Depth::Near => {
                let color = match voxel.hue {
                    0 => palette.primary_dim,
                    1 => palette.purple,
                    _ => palette.red,
                };
                (glyphs.voxel_near, blend(palette.bg_dark, color, 0.55))
            }
        };
        let cell = &mut buf[(x, y)];
        cell.set_symbol(symbol);
        cell.fg = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn blend_endpoints() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(200, 100, 50);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn blend_passes_non_rgb_through() {
        assert_eq!(blend(Color::Black, Color::Rgb(1, 2, 3), 0.8), Color::Black);
    }

    #[test]
    fn overlay_effect_starts_small_and_grows() {
        let base = Rect::new(10, 10, 40, 20);
        let mut effect = OverlayEffect::pop_scale(Duration::from_millis(200));
        let early = apply_overlay_effect(&effect, base);
        assert!(early.width < base.width);
        assert!(early.x > base.x);
        effect.advance(Duration::from_millis(500));
        assert_eq!(apply_overlay_effect(&effect, base), base);
    }

    #[test]
    fn displace_clamps_to_container() {
        let within = Rect::new(0, 0, 40, 20);
        let base = Rect::new(35, 18, 5, 2);
        let moved = displace(base, Vec2::new(100.0, 100.0), within);
        assert_eq!(moved.x + moved.width, 40);
        assert_eq!(moved.y + moved.height, 20);
    }

    #[test]
    fn page_enter_offset_decays_to_zero() {
        let mut effect = PageEffect::enter();
        assert!(page_enter_offset(&effect) > 0);
        effect.advance(Duration::from_secs(1));
        assert_eq!(page_enter_offset(&effect), 0);
    }
}
