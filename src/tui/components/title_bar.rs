//! # TitleBar Component
//!
//! Top status line: app name, active track, open lesson, theme indicator,
//! and key hints.
//!
//! Purely presentational - it receives all data as props and holds no
//! state, so the render is a straight function of its fields. Props come
//! from different owners (module/lesson from TuiState, theme from the
//! ThemeManager) and the bar doesn't care which.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::core::catalog::Module;
use crate::core::theme::Theme;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub struct TitleBar {
    pub module: Module,
    pub lesson_title: Option<String>,
    pub theme: Theme,
    pub palette: Palette,
}

impl TitleBar {
    pub fn new(
        module: Module,
        lesson_title: Option<String>,
        theme: Theme,
        palette: Palette,
    ) -> Self {
        Self {
            module,
            lesson_title,
            theme,
            palette,
        }
    }

    fn title_text(&self) -> String {
        match &self.lesson_title {
            Some(lesson) => format!("swiftwise · {} · {}", self.module.label(), lesson),
            None => format!("swiftwise · {}", self.module.label()),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme_tag = match self.theme {
            Theme::Light => "☀ light",
            Theme::Dark => "☾ dark",
        };
        let hints = "Tab track · t theme · q quit";

        let title = self.title_text();
        // Right-align the hints when there's room for both.
        let left_width = title.chars().count() + 2 + theme_tag.chars().count();
        let padding = (area.width as usize)
            .saturating_sub(left_width + hints.chars().count() + 1);

        let line = Line::from(vec![
            Span::styled(title, self.palette.heading_style()),
            Span::styled("  ", self.palette.muted_style()),
            Span::styled(theme_tag, self.palette.muted_style()),
            Span::styled(" ".repeat(padding), self.palette.muted_style()),
            Span::styled(hints, self.palette.muted_style()),
        ]);
        frame.render_widget(line, area);
    }
}
