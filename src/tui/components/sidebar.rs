//! # Sidebar Component
//!
//! Lesson navigation for the active track: lessons grouped under their
//! category labels, in catalog order. Category order comes from
//! `Catalog::categories_for_module`, so the curated first-occurrence
//! ordering shows up here verbatim.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SidebarState` lives in `TuiState`
//! - `Sidebar` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::catalog::{Catalog, Module};
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

/// One row in the flattened sidebar list. Category headers render but
/// can't be selected; cursor movement skips over them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarRow {
    Category(&'static str),
    Lesson {
        id: &'static str,
        title: &'static str,
    },
}

impl SidebarRow {
    fn is_lesson(&self) -> bool {
        matches!(self, SidebarRow::Lesson { .. })
    }
}

/// Events emitted by the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    /// Enter on a lesson row.
    Open(&'static str),
}

/// Persistent sidebar state for one track.
pub struct SidebarState {
    pub module: Module,
    rows: Vec<SidebarRow>,
    selected: usize,
    list_state: ListState,
}

impl SidebarState {
    /// Build the grouped row list for a track. Selection starts on the
    /// first lesson (not the first row, which is a category header).
    pub fn new(catalog: &Catalog, module: Module) -> Self {
        let mut rows = Vec::new();
        for category in catalog.categories_for_module(module) {
            rows.push(SidebarRow::Category(category));
            for lesson in catalog.lessons_for_module(module) {
                if lesson.category == category {
                    rows.push(SidebarRow::Lesson {
                        id: lesson.id,
                        title: lesson.title,
                    });
                }
            }
        }

        let selected = rows.iter().position(SidebarRow::is_lesson).unwrap_or(0);
        let mut list_state = ListState::default();
        if !rows.is_empty() {
            list_state.select(Some(selected));
        }
        Self {
            module,
            rows,
            selected,
            list_state,
        }
    }

    pub fn rows(&self) -> &[SidebarRow] {
        &self.rows
    }

    /// Id of the lesson row under the cursor, if any.
    pub fn selected_lesson(&self) -> Option<&'static str> {
        match self.rows.get(self.selected) {
            Some(SidebarRow::Lesson { id, .. }) => Some(id),
            _ => None,
        }
    }

    /// Move the cursor onto a specific lesson (used by `--lesson`).
    pub fn select_lesson(&mut self, lesson_id: &str) {
        if let Some(index) = self.rows.iter().position(
            |row| matches!(row, SidebarRow::Lesson { id, .. } if *id == lesson_id),
        ) {
            self.selected = index;
            self.list_state.select(Some(index));
        }
    }

    fn move_up(&mut self) {
        let mut index = self.selected;
        while index > 0 {
            index -= 1;
            if self.rows[index].is_lesson() {
                self.selected = index;
                self.list_state.select(Some(index));
                return;
            }
        }
    }

    fn move_down(&mut self) {
        let mut index = self.selected;
        while index + 1 < self.rows.len() {
            index += 1;
            if self.rows[index].is_lesson() {
                self.selected = index;
                self.list_state.select(Some(index));
                return;
            }
        }
    }
}

impl EventHandler for SidebarState {
    type Event = SidebarEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SidebarEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.move_up();
                None
            }
            TuiEvent::CursorDown => {
                self.move_down();
                None
            }
            TuiEvent::Submit => self.selected_lesson().map(SidebarEvent::Open),
            _ => None,
        }
    }
}

/// Transient render wrapper for the sidebar.
pub struct Sidebar<'a> {
    state: &'a mut SidebarState,
    palette: &'a Palette,
    /// Lesson currently open in the content pane, if any.
    open_lesson: Option<&'a str>,
    focused: bool,
}

impl<'a> Sidebar<'a> {
    pub fn new(
        state: &'a mut SidebarState,
        palette: &'a Palette,
        open_lesson: Option<&'a str>,
        focused: bool,
    ) -> Self {
        Self {
            state,
            palette,
            open_lesson,
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
            .title(format!(" {} ", self.state.module.label()))
            .title_alignment(Alignment::Left)
            .padding(Padding::horizontal(1));

        if self.state.rows.is_empty() {
            let empty = Paragraph::new("No lessons in this track yet.")
                .style(self.palette.muted_style())
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(4) as usize; // borders + padding
        let items: Vec<ListItem> = self
            .state
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| self.row_item(i, row, inner_width))
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }

    fn row_item(&self, index: usize, row: &SidebarRow, inner_width: usize) -> ListItem<'static> {
        match row {
            SidebarRow::Category(name) => ListItem::new(Line::from(Span::styled(
                truncate_str(name, inner_width),
                self.palette
                    .muted_style()
                    .add_modifier(Modifier::BOLD),
            ))),
            SidebarRow::Lesson { id, title } => {
                let is_open = self.open_lesson == Some(*id);
                let style = if index == self.state.selected && self.focused {
                    self.palette.selected_style()
                } else if is_open {
                    ratatui::style::Style::default().fg(self.palette.accent)
                } else {
                    self.palette.text_style()
                };
                let marker = if is_open { "▸ " } else { "  " };
                let label = truncate_str(title, inner_width.saturating_sub(marker.width()));
                ListItem::new(Line::from(vec![
                    Span::styled(marker.to_string(), style),
                    Span::styled(label, style),
                ]))
            }
        }
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if
/// needed. Width-aware so wide glyphs in lesson titles don't overflow.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    fn state() -> SidebarState {
        SidebarState::new(content::catalog(), Module::SwiftBasics)
    }

    #[test]
    fn rows_group_lessons_under_categories_in_catalog_order() {
        let state = state();
        let rows = state.rows();

        // First row is the first curated category, not an alphabetical one
        assert_eq!(rows[0], SidebarRow::Category("Type System"));
        // Lessons follow their header
        assert!(matches!(
            rows[1],
            SidebarRow::Lesson { id: "types-and-inference", .. }
        ));

        // Each category appears exactly once
        let headers: Vec<&str> = rows
            .iter()
            .filter_map(|r| match r {
                SidebarRow::Category(name) => Some(*name),
                _ => None,
            })
            .collect();
        let catalog_order = content::catalog().categories_for_module(Module::SwiftBasics);
        assert_eq!(headers, catalog_order);
    }

    #[test]
    fn initial_selection_is_first_lesson() {
        let state = state();
        assert_eq!(state.selected_lesson(), Some("types-and-inference"));
    }

    #[test]
    fn cursor_skips_category_headers() {
        let mut state = state();
        let first = state.selected_lesson().unwrap();

        state.handle_event(&TuiEvent::CursorDown);
        let second = state.selected_lesson().unwrap();
        assert_ne!(first, second, "moved to a lesson, not a header");

        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected_lesson(), Some(first));
    }

    #[test]
    fn cursor_stops_at_edges() {
        let mut state = state();
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected_lesson(), Some("types-and-inference"));

        for _ in 0..100 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        let last = state.selected_lesson().unwrap();
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected_lesson(), Some(last));
    }

    #[test]
    fn submit_emits_open_for_selected_lesson() {
        let mut state = state();
        let event = state.handle_event(&TuiEvent::Submit);
        assert_eq!(event, Some(SidebarEvent::Open("types-and-inference")));
    }

    #[test]
    fn select_lesson_jumps_cursor() {
        let mut state = state();
        state.select_lesson("protocols");
        assert_eq!(state.selected_lesson(), Some("protocols"));

        // Unknown ids leave the cursor alone
        state.select_lesson("nonexistent-id");
        assert_eq!(state.selected_lesson(), Some("protocols"));
    }

    #[test]
    fn truncate_str_respects_width() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("a very long lesson title", 10), "a very ...");
        assert_eq!(truncate_str("abcdef", 2), "..");
    }
}
