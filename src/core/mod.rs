//! # Core Application Logic
//!
//! This module contains swiftwise's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (queries)    │
//!                    │  • ThemeManager         │
//!                    │  • Config resolution    │
//!                    │                         │
//!                    │  No UI. Pure data.      │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   tests/   │
//!             │  Adapter   │          │ (public    │
//!             │ (ratatui)  │          │  lib API)  │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: the immutable lesson list and its pure query functions
//! - [`theme`]: light/dark resolution, persistence, and OS-change handling
//! - [`config`]: `~/.swiftwise` config file and the preference store

pub mod catalog;
pub mod config;
pub mod theme;
