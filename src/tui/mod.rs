//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into calls on the core catalog and
//! theme types.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw: it sleeps in `event::poll`
//! for up to 500ms and only draws a frame after an input event, a
//! resize, or an OS appearance change. The palette is re-derived from
//! the active theme on every draw, so a theme flip from any source is
//! just another redraw.

pub mod code;
mod component;
pub mod components;
mod event;
pub mod markup;
pub mod palette;

use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use log::{debug, info};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::content;
use crate::core::config::{FilePreferenceStore, ResolvedConfig};
use crate::core::theme::{AppearanceSignal, ThemeManager, detect_system_prefers_light};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{
    LessonView, LessonViewState, Sidebar, SidebarEvent, SidebarState, TitleBar, Welcome,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::palette::Palette;

/// How often the idle loop re-probes the OS appearance.
const APPEARANCE_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Which pane keyboard focus is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Lesson,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    pub sidebar: SidebarState,
    pub lesson_view: LessonViewState,
    /// Lesson open in the content pane, None shows the welcome page.
    pub open_lesson: Option<&'static str>,
    /// Set when `--lesson` named an id that doesn't exist.
    pub missing_lesson: Option<String>,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        let mut sidebar = SidebarState::new(content::catalog(), config.start_module);
        let mut open_lesson = None;
        let mut missing_lesson = None;

        if let Some(requested) = &config.start_lesson {
            match content::catalog().lesson_by_id(requested) {
                Some(lesson) => {
                    if lesson.module != config.start_module {
                        sidebar = SidebarState::new(content::catalog(), lesson.module);
                    }
                    sidebar.select_lesson(lesson.id);
                    open_lesson = Some(lesson.id);
                }
                None => {
                    info!("Requested lesson '{}' not found", requested);
                    missing_lesson = Some(requested.clone());
                }
            }
        }

        Self {
            focus: if open_lesson.is_some() {
                Focus::Lesson
            } else {
                Focus::Sidebar
            },
            sidebar,
            lesson_view: LessonViewState::new(),
            open_lesson,
            missing_lesson,
        }
    }

    fn open(&mut self, lesson_id: &'static str) {
        self.open_lesson = Some(lesson_id);
        self.missing_lesson = None;
        self.lesson_view.reset();
        self.focus = Focus::Lesson;
    }

    fn switch_module(&mut self) {
        let next = self.sidebar.module.next();
        self.sidebar = SidebarState::new(content::catalog(), next);
        self.open_lesson = None;
        self.focus = Focus::Sidebar;
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let store = FilePreferenceStore::open_default();
    let theme_manager = ThemeManager::new(Box::new(store), detect_system_prefers_light());
    info!("Initial theme: {}", theme_manager.current().as_str());

    // OS appearance changes arrive through this signal; the idle loop
    // re-probes and emits when the answer flips. The subscription must
    // stay alive for the whole run, dropping it unregisters the handler.
    let appearance = AppearanceSignal::new();
    let _appearance_subscription = theme_manager.watch(&appearance);
    let mut last_prefers_light = detect_system_prefers_light();
    let mut last_probe = Instant::now();

    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            let theme = theme_manager.current();
            let palette = Palette::for_theme(theme);
            let code_theme = match theme {
                crate::core::theme::Theme::Light => &config.code_theme_light,
                crate::core::theme::Theme::Dark => &config.code_theme_dark,
            };
            terminal.draw(|f| draw_ui(f, &mut tui, theme, &palette, code_theme))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));

        // Re-probe the OS appearance occasionally while idle
        if last_probe.elapsed() >= APPEARANCE_POLL_INTERVAL {
            last_probe = Instant::now();
            let prefers_light = detect_system_prefers_light();
            if prefers_light != last_prefers_light {
                debug!("OS appearance changed: prefers_light={}", prefers_light);
                last_prefers_light = prefers_light;
                appearance.emit(prefers_light);
                needs_redraw = true;
            }
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                TuiEvent::Resize => {}
                TuiEvent::Quit => should_quit = true,
                TuiEvent::ToggleTheme => {
                    let theme = theme_manager.toggle();
                    info!("Theme toggled to {}", theme.as_str());
                }
                TuiEvent::SwitchModule => tui.switch_module(),
                TuiEvent::Escape => {
                    tui.open_lesson = None;
                    tui.missing_lesson = None;
                    tui.focus = Focus::Sidebar;
                }
                TuiEvent::CursorUp | TuiEvent::CursorDown => {
                    // Arrows always drive the sidebar; an open lesson
                    // follows the cursor so browsing feels immediate.
                    tui.sidebar.handle_event(&event);
                    if tui.open_lesson.is_some()
                        && let Some(id) = tui.sidebar.selected_lesson()
                    {
                        tui.open(id);
                    }
                }
                TuiEvent::Submit => {
                    if let Some(SidebarEvent::Open(id)) = tui.sidebar.handle_event(&event) {
                        tui.open(id);
                    }
                }
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown
                | TuiEvent::ScrollToTop
                | TuiEvent::ScrollToBottom => {
                    tui.lesson_view.handle_event(&event);
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Draw the full frame: title bar on top, sidebar and content below.
fn draw_ui(
    frame: &mut Frame,
    tui: &mut TuiState,
    theme: crate::core::theme::Theme,
    palette: &Palette,
    code_theme: &str,
) {
    // Paint the theme background first; widgets draw on top of it.
    let backdrop = ratatui::widgets::Block::default()
        .style(ratatui::style::Style::default().bg(palette.background));
    frame.render_widget(backdrop, frame.area());

    let [title_area, body_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());
    let [sidebar_area, content_area] =
        Layout::horizontal([Constraint::Length(34), Constraint::Min(0)]).areas(body_area);

    let open = tui
        .open_lesson
        .and_then(|id| content::catalog().lesson_by_id(id));

    let mut title_bar = TitleBar::new(
        tui.sidebar.module,
        open.map(|l| l.title.to_string()),
        theme,
        *palette,
    );
    title_bar.render(frame, title_area);

    let mut sidebar = Sidebar::new(
        &mut tui.sidebar,
        palette,
        tui.open_lesson,
        tui.focus == Focus::Sidebar,
    );
    sidebar.render(frame, sidebar_area);

    match open {
        Some(lesson) => {
            let mut view = LessonView::new(
                &mut tui.lesson_view,
                lesson,
                palette,
                code_theme,
                tui.focus == Focus::Lesson,
            );
            view.render(frame, content_area);
        }
        None => {
            let mut welcome = Welcome::new(palette, tui.missing_lesson.as_deref());
            welcome.render(frame, content_area);
        }
    }
}
