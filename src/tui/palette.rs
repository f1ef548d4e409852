//! Light/dark style palettes.
//!
//! The visual half of the theme system: `core::theme` decides *which*
//! theme is active, this module says what that theme *looks like*. The
//! event loop re-derives the palette from `ThemeManager::current()` every
//! frame, so a toggle (or an adopted OS change) is visible on the next
//! draw with no extra plumbing.

use ratatui::style::{Color, Modifier, Style};

use crate::core::theme::Theme;

/// Every color role the UI draws with, resolved for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub heading: Color,
    pub accent: Color,
    pub inline_code_fg: Color,
    pub inline_code_bg: Color,
    pub border: Color,
    pub selection_fg: Color,
    pub tip_marker: Color,
    pub highlight_line_bg: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            text: Color::Gray,
            muted: Color::DarkGray,
            heading: Color::White,
            accent: Color::Cyan,
            inline_code_fg: Color::White,
            inline_code_bg: Color::DarkGray,
            border: Color::DarkGray,
            selection_fg: Color::White,
            tip_marker: Color::Yellow,
            highlight_line_bg: Color::Rgb(45, 50, 65),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            text: Color::Black,
            muted: Color::Rgb(110, 110, 110),
            heading: Color::Rgb(20, 20, 20),
            accent: Color::Rgb(20, 100, 180),
            inline_code_fg: Color::Rgb(40, 40, 40),
            inline_code_bg: Color::Rgb(230, 230, 235),
            border: Color::Rgb(170, 170, 170),
            selection_fg: Color::Black,
            tip_marker: Color::Rgb(160, 120, 0),
            highlight_line_bg: Color::Rgb(235, 240, 220),
        }
    }

    // ── Derived styles ──────────────────────────────────────────────────

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn heading_style(&self) -> Style {
        Style::default().fg(self.heading).add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn inline_code_style(&self) -> Style {
        Style::default()
            .fg(self.inline_code_fg)
            .bg(self.inline_code_bg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_between_themes() {
        let dark = Palette::for_theme(Theme::Dark);
        let light = Palette::for_theme(Theme::Light);
        assert_ne!(dark, light);
        assert_ne!(dark.text, light.text);
    }

    #[test]
    fn for_theme_matches_constructors() {
        assert_eq!(Palette::for_theme(Theme::Dark), Palette::dark());
        assert_eq!(Palette::for_theme(Theme::Light), Palette::light());
    }
}
