//! # Welcome Component
//!
//! Shown in the content pane when no lesson is open: a small wordmark,
//! a one-line pitch, and the key hints. Also covers the case where a
//! `--lesson` id didn't match anything.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::component::Component;
use crate::tui::palette::Palette;

const WORDMARK: &[&str] = &[
    r"               _  __ _            _          ",
    r" _____      __(_)/ _| |___      _(_)___  ___ ",
    r"/ __\ \ /\ / / | |_| __\ \ /\ / / / __|/ _ \",
    r"\__ \\ V  V /| |  _| |_ \ V  V /| \__ \  __/",
    r"|___/ \_/\_/ |_|_|  \__| \_/\_/ |_|___/\___|",
];

pub struct Welcome<'a> {
    palette: &'a Palette,
    /// Set when a requested lesson id wasn't found.
    missing_lesson: Option<&'a str>,
}

impl<'a> Welcome<'a> {
    pub fn new(palette: &'a Palette, missing_lesson: Option<&'a str>) -> Self {
        Self {
            palette,
            missing_lesson,
        }
    }
}

impl Component for Welcome<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();
        if inner.width as usize > WORDMARK[0].len() && inner.height > 12 {
            for row in WORDMARK {
                lines.push(Line::from(Span::styled(
                    *row,
                    ratatui::style::Style::default().fg(self.palette.accent),
                )));
            }
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(
            "SwiftUI for React developers",
            self.palette
                .heading_style()
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            self.palette.muted_style(),
        )));
        lines.push(Line::default());

        if let Some(id) = self.missing_lesson {
            lines.push(Line::from(Span::styled(
                format!("No lesson called \"{id}\" - pick one from the sidebar."),
                ratatui::style::Style::default().fg(self.palette.tip_marker),
            )));
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(
            "↑/↓ browse · Enter open · Tab switch track · t theme · q quit",
            self.palette.muted_style(),
        )));

        let text_height = lines.len() as u16;
        let [centered] = Layout::vertical([Constraint::Length(text_height)])
            .flex(Flex::Center)
            .areas(inner);

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, centered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(missing: Option<&str>) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let palette = Palette::dark();
        terminal
            .draw(|frame| {
                let mut welcome = Welcome::new(&palette, missing);
                welcome.render(frame, frame.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn shows_pitch_and_hints() {
        let rendered = render_to_string(None);
        assert!(rendered.contains("SwiftUI for React developers"));
        assert!(rendered.contains("Enter open"));
    }

    #[test]
    fn shows_missing_lesson_notice() {
        let rendered = render_to_string(Some("no-such-lesson"));
        assert!(rendered.contains("no-such-lesson"));
    }
}
