use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    /// Enter - open the selected lesson.
    Submit,
    /// Esc - back out of the current lesson to the welcome page.
    Escape,
    /// Tab - switch between the two module tracks.
    SwitchModule,
    /// `t` - flip the light/dark theme.
    ToggleTheme,
    CursorUp,
    CursorDown,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    ScrollToTop,
    ScrollToBottom,
    Resize,
}

/// Poll for an event without blocking. Used to drain everything pending
/// before the next draw.
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    match event::read().ok()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                (_, KeyCode::Char('t')) => Some(TuiEvent::ToggleTheme),
                (_, KeyCode::Tab) => Some(TuiEvent::SwitchModule),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
                (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
                (_, KeyCode::Home) => Some(TuiEvent::ScrollToTop),
                (_, KeyCode::End) => Some(TuiEvent::ScrollToBottom),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
