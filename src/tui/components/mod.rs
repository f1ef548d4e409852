//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar showing track, lesson, and theme
//! - `Welcome`: Landing screen when no lesson is open
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state and emit events:
//! - `SidebarState`/`Sidebar`: Category-grouped lesson navigation
//! - `LessonViewState`/`LessonView`: Scrollable lesson content
//!
//! Stateful components split persistent state (lives in `TuiState`
//! across frames) from a transient render wrapper built fresh each
//! frame with borrowed state and props. Each component file co-locates
//! its state type, event type, rendering, event handling, and tests.

mod title_bar;
pub use title_bar::TitleBar;

pub mod lesson_view;
pub mod sidebar;
pub mod welcome;
pub use lesson_view::{LessonView, LessonViewState};
pub use sidebar::{Sidebar, SidebarEvent, SidebarState};
pub use welcome::Welcome;
