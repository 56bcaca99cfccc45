//! Color theme and glyphs for the Folio TUI.
//!
//! Uses a Tokyo Night palette by default with an optional high-contrast
//! override, matching the dark voxel look of the original site.

use ratatui::style::{Color, Modifier, Style};

use folio_engine::UiOptions;
use folio_types::SocialKind;

/// Tokyo Night color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(26, 27, 38); // #1a1b26
    pub const BG_PANEL: Color = Color::Rgb(36, 40, 59); // #24283b
    pub const BG_HIGHLIGHT: Color = Color::Rgb(41, 46, 66); // #292e42
    pub const BG_POPUP: Color = Color::Rgb(31, 35, 53); // #1f2335
    pub const BG_BORDER: Color = Color::Rgb(59, 66, 97); // #3b4261

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(192, 202, 245); // #c0caf5
    pub const TEXT_SECONDARY: Color = Color::Rgb(169, 177, 214); // #a9b1d6
    pub const TEXT_MUTED: Color = Color::Rgb(86, 95, 137); // #565f89
    pub const TEXT_DISABLED: Color = Color::Rgb(65, 72, 104); // #414868

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(122, 162, 247); // #7aa2f7
    pub const PRIMARY_DIM: Color = Color::Rgb(61, 89, 161); // #3d59a1

    // === Accent Colors ===
    pub const PURPLE: Color = Color::Rgb(187, 154, 247); // #bb9af7
    pub const CYAN: Color = Color::Rgb(125, 207, 255); // #7dcfff
    pub const GREEN: Color = Color::Rgb(158, 206, 106); // #9ece6a
    pub const YELLOW: Color = Color::Rgb(224, 175, 104); // #e0af68
    pub const ORANGE: Color = Color::Rgb(255, 158, 100); // #ff9e64
    pub const RED: Color = Color::Rgb(247, 118, 142); // #f7768e

    // === Semantic Aliases ===
    pub const ACCENT: Color = CYAN;
    pub const SUCCESS: Color = GREEN;
    pub const WARNING: Color = YELLOW;
    pub const DANGER: Color = RED;
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_popup: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub purple: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub green: Color,
    pub yellow: Color,
    pub orange: Color,
    pub red: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_popup: colors::BG_POPUP,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            text_disabled: colors::TEXT_DISABLED,
            primary: colors::PRIMARY,
            primary_dim: colors::PRIMARY_DIM,
            purple: colors::PURPLE,
            accent: colors::ACCENT,
            success: colors::SUCCESS,
            warning: colors::WARNING,
            danger: colors::DANGER,
            green: colors::GREEN,
            yellow: colors::YELLOW,
            orange: colors::ORANGE,
            red: colors::RED,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_popup: Color::Black,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            text_disabled: Color::DarkGray,
            primary: Color::White,
            primary_dim: Color::Gray,
            purple: Color::Magenta,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            danger: Color::Red,
            green: Color::Green,
            yellow: Color::Yellow,
            orange: Color::Yellow,
            red: Color::Red,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for icons and decorations.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub logo: &'static str,
    pub dot: &'static str,
    pub cursor: &'static str,
    pub selected: &'static str,
    pub bullet: &'static str,
    pub arrow_right: &'static str,
    pub arrow_up: &'static str,
    pub arrow_down: &'static str,
    pub menu: &'static str,
    pub close: &'static str,
    pub diamond: &'static str,
    pub window_buttons: &'static str,
    pub timeline: &'static str,
    pub voxel_near: &'static str,
    pub voxel_mid: &'static str,
    pub voxel_far: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            logo: "#",
            dot: "*",
            cursor: "_",
            selected: ">",
            bullet: "*",
            arrow_right: "->",
            arrow_up: "^",
            arrow_down: "v",
            menu: "=",
            close: "x",
            diamond: "+",
            window_buttons: "o o o",
            timeline: "|",
            voxel_near: "#",
            voxel_mid: "+",
            voxel_far: ".",
        }
    } else {
        Glyphs {
            logo: "■",
            dot: "●",
            cursor: "█",
            selected: "▸",
            bullet: "•",
            arrow_right: "→",
            arrow_up: "↑",
            arrow_down: "↓",
            menu: "≡",
            close: "✕",
            diamond: "◆",
            window_buttons: "● ● ●",
            timeline: "│",
            voxel_near: "▪",
            voxel_mid: "▫",
            voxel_far: "·",
        }
    }
}

/// Glyph for a social link's service.
#[must_use]
pub fn social_glyph(kind: SocialKind, options: UiOptions) -> &'static str {
    if options.ascii_only {
        return match kind {
            SocialKind::Github => "gh",
            SocialKind::Linkedin => "in",
            SocialKind::Huggingface => "hf",
            SocialKind::Resume => "cv",
            SocialKind::Email => "@",
            SocialKind::Whatsapp => "wa",
        };
    }
    match kind {
        SocialKind::Github => "🐙",
        SocialKind::Linkedin => "💼",
        SocialKind::Huggingface => "🤗",
        SocialKind::Resume => "📄",
        SocialKind::Email => "✉",
        SocialKind::Whatsapp => "✆",
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn subheading(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn nav_active(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn nav_inactive(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_secondary)
            .bg(palette.bg_panel)
    }

    #[must_use]
    pub fn tag(palette: &Palette) -> Style {
        Style::default().fg(palette.purple).bg(palette.bg_highlight)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.orange)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_contrast_flag_switches_palette() {
        let standard = palette(UiOptions::default());
        let contrast = palette(UiOptions {
            high_contrast: true,
            ..UiOptions::default()
        });
        assert_ne!(format!("{standard:?}"), format!("{contrast:?}"));
        assert_eq!(contrast.text_primary, Color::White);
    }

    #[test]
    fn ascii_glyphs_are_ascii() {
        let g = glyphs(UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        });
        for s in [
            g.logo,
            g.dot,
            g.cursor,
            g.selected,
            g.bullet,
            g.arrow_right,
            g.menu,
            g.close,
            g.diamond,
            g.window_buttons,
            g.voxel_near,
        ] {
            assert!(s.is_ascii(), "glyph {s:?} must be ascii");
        }
    }
}
