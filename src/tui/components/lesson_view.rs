//! # Lesson View Component
//!
//! Scrollable reading pane for one lesson. Comparison sections render
//! the React and SwiftUI snippets side by side; single-code sections
//! render one full-width frame. Everything is laid out into a
//! `tui_scrollview::ScrollView` sized to the total content height, so
//! scrolling is just buffer offsetting.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState};

use crate::core::catalog::{Language, Lesson, SectionBody};
use crate::tui::code::render_code;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::markup::render_inline;
use crate::tui::palette::Palette;

/// Minimum pane width for side-by-side code. Below this the two
/// snippets stack vertically instead.
const MIN_SPLIT_PANE_WIDTH: u16 = 38;

/// Persistent scroll state for the lesson pane.
pub struct LessonViewState {
    pub scroll: ScrollViewState,
}

impl LessonViewState {
    pub fn new() -> Self {
        Self {
            scroll: ScrollViewState::default(),
        }
    }

    /// Reset to the top, for when a different lesson opens.
    pub fn reset(&mut self) {
        self.scroll.scroll_to_top();
    }
}

impl Default for LessonViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for LessonViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp => self.scroll.scroll_up(),
            TuiEvent::ScrollDown => self.scroll.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll.scroll_page_down(),
            TuiEvent::ScrollToTop => self.scroll.scroll_to_top(),
            TuiEvent::ScrollToBottom => self.scroll.scroll_to_bottom(),
            _ => return None,
        }
        Some(())
    }
}

/// One measured piece of lesson content, ready to place in the scroll
/// view. Code blocks are pre-rendered `Text`; prose is re-wrapped to
/// the pane width at measure time.
enum ContentBlock {
    Prose { text: Text<'static>, height: u16 },
    Code { text: Text<'static>, height: u16 },
    SplitCode {
        left: Text<'static>,
        right: Text<'static>,
        height: u16,
    },
    Gap(u16),
}

impl ContentBlock {
    fn height(&self) -> u16 {
        match self {
            ContentBlock::Prose { height, .. } => *height,
            ContentBlock::Code { height, .. } => *height,
            ContentBlock::SplitCode { height, .. } => *height,
            ContentBlock::Gap(height) => *height,
        }
    }
}

/// Transient render wrapper for the lesson pane.
pub struct LessonView<'a> {
    state: &'a mut LessonViewState,
    lesson: &'a Lesson,
    palette: &'a Palette,
    code_theme: &'a str,
    focused: bool,
}

impl<'a> LessonView<'a> {
    pub fn new(
        state: &'a mut LessonViewState,
        lesson: &'a Lesson,
        palette: &'a Palette,
        code_theme: &'a str,
        focused: bool,
    ) -> Self {
        Self {
            state,
            lesson,
            palette,
            code_theme,
            focused,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            self.palette.border_style().add_modifier(Modifier::BOLD)
        } else {
            self.palette.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width < 4 || inner.height < 2 {
            return;
        }

        if self.lesson.sections.is_empty() {
            let placeholder = Paragraph::new("This lesson has no content yet.")
                .style(self.palette.muted_style())
                .alignment(ratatui::layout::Alignment::Center);
            frame.render_widget(placeholder, inner);
            return;
        }

        let blocks = self.build_blocks(inner.width);
        let total_height: u16 = blocks.iter().map(ContentBlock::height).sum();

        let mut scroll_view = ScrollView::new(Size::new(inner.width, total_height.max(1)));
        let mut y = 0u16;
        for content_block in blocks {
            let height = content_block.height();
            match content_block {
                ContentBlock::Prose { text, .. } => {
                    let widget = Paragraph::new(text).wrap(Wrap { trim: false });
                    scroll_view.render_widget(widget, Rect::new(0, y, inner.width, height));
                }
                ContentBlock::Code { text, .. } => {
                    scroll_view
                        .render_widget(Paragraph::new(text), Rect::new(0, y, inner.width, height));
                }
                ContentBlock::SplitCode { left, right, .. } => {
                    let pane_width = (inner.width.saturating_sub(2)) / 2;
                    scroll_view
                        .render_widget(Paragraph::new(left), Rect::new(0, y, pane_width, height));
                    scroll_view.render_widget(
                        Paragraph::new(right),
                        Rect::new(pane_width + 2, y, pane_width, height),
                    );
                }
                ContentBlock::Gap(_) => {}
            }
            y = y.saturating_add(height);
        }

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll);
    }

    /// Lay the whole lesson out as measured blocks for `width`.
    fn build_blocks(&self, width: u16) -> Vec<ContentBlock> {
        let mut blocks = Vec::new();

        let title = Text::from(Line::from(Span::styled(
            self.lesson.title.to_string(),
            self.palette.heading_style(),
        )));
        blocks.push(ContentBlock::Prose {
            text: title,
            height: 1,
        });
        blocks.push(prose_block(self.lesson.description, self.palette, width));
        blocks.push(ContentBlock::Gap(1));

        for section in &self.lesson.sections {
            let heading = Text::from(Line::from(Span::styled(
                format!("## {}", section.title),
                self.palette.heading_style(),
            )));
            blocks.push(ContentBlock::Prose {
                text: heading,
                height: 1,
            });
            blocks.push(ContentBlock::Gap(1));
            blocks.push(prose_block(section.explanation, self.palette, width));
            blocks.push(ContentBlock::Gap(1));

            match &section.body {
                SectionBody::Comparison {
                    react,
                    swiftui,
                    left_title,
                    right_title,
                } => {
                    let left_caption = left_title.unwrap_or("React");
                    let right_caption = right_title.unwrap_or("SwiftUI");
                    let left = render_code(
                        react,
                        Language::TypeScript.syntax_token(),
                        left_caption,
                        self.code_theme,
                        self.palette,
                    );
                    let right = render_code(
                        swiftui,
                        Language::Swift.syntax_token(),
                        right_caption,
                        self.code_theme,
                        self.palette,
                    );
                    let pane_width = width.saturating_sub(2) / 2;
                    if pane_width >= MIN_SPLIT_PANE_WIDTH {
                        let height = (left.height().max(right.height())) as u16;
                        blocks.push(ContentBlock::SplitCode {
                            left,
                            right,
                            height,
                        });
                    } else {
                        // Narrow terminal: stack the panes
                        let left_height = left.height() as u16;
                        let right_height = right.height() as u16;
                        blocks.push(ContentBlock::Code {
                            text: left,
                            height: left_height,
                        });
                        blocks.push(ContentBlock::Gap(1));
                        blocks.push(ContentBlock::Code {
                            text: right,
                            height: right_height,
                        });
                    }
                }
                SectionBody::SingleCode { code, language } => {
                    let text = render_code(
                        code,
                        language.syntax_token(),
                        language.label(),
                        self.code_theme,
                        self.palette,
                    );
                    let height = text.height() as u16;
                    blocks.push(ContentBlock::Code { text, height });
                }
            }

            if !section.tips.is_empty() {
                blocks.push(ContentBlock::Gap(1));
                for tip in section.tips {
                    let mut line = render_inline(tip, self.palette);
                    line.spans.insert(
                        0,
                        Span::styled(
                            "› ",
                            ratatui::style::Style::default().fg(self.palette.tip_marker),
                        ),
                    );
                    let text = Text::from(line);
                    let height = Paragraph::new(text.clone())
                        .wrap(Wrap { trim: false })
                        .line_count(width) as u16;
                    blocks.push(ContentBlock::Prose { text, height });
                }
            }
            blocks.push(ContentBlock::Gap(1));
        }

        blocks
    }
}

/// Markup-rendered prose, measured at `width` for wrapping.
fn prose_block(content: &str, palette: &Palette, width: u16) -> ContentBlock {
    let text = Text::from(render_inline(content, palette));
    let height = Paragraph::new(text.clone())
        .wrap(Wrap { trim: false })
        .line_count(width) as u16;
    ContentBlock::Prose { text, height }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn lesson() -> &'static Lesson {
        content::catalog()
            .lesson_by_id("types-and-inference")
            .unwrap()
    }

    fn render_to_string(width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let palette = Palette::dark();
        let mut state = LessonViewState::new();
        terminal
            .draw(|frame| {
                let mut view = LessonView::new(
                    &mut state,
                    lesson(),
                    &palette,
                    "base16-ocean.dark",
                    true,
                );
                view.render(frame, frame.area());
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
    fn renders_title_and_summary_at_top() {
        let rendered = render_to_string(120, 30);
        assert!(rendered.contains("Types & Type Inference"));
    }

    #[test]
    fn wide_terminal_shows_both_captions_on_one_row() {
        let rendered = render_to_string(120, 40);
        let side_by_side = rendered
            .lines()
            .any(|line| line.contains("React") && line.contains("SwiftUI"));
        assert!(side_by_side, "expected captions on the same row:\n{rendered}");
    }

    #[test]
    fn narrow_terminal_stacks_code_panes() {
        let rendered = render_to_string(50, 60);
        let side_by_side = rendered
            .lines()
            .any(|line| line.contains("React") && line.contains("SwiftUI"));
        assert!(!side_by_side, "expected stacked panes:\n{rendered}");
    }

    #[test]
    fn scroll_events_are_consumed() {
        let mut state = LessonViewState::new();
        assert_eq!(state.handle_event(&TuiEvent::ScrollDown), Some(()));
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }
}
