//! # Curriculum Content
//!
//! The compiled-in lesson data, one file per track. Content is literal
//! data defined once at first access and never mutated - no database, no
//! fetch. The rest of the crate reaches it through [`catalog()`].

use std::sync::LazyLock;

use crate::core::catalog::Catalog;

mod swift_basics;
mod swiftui;

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    let mut lessons = swift_basics::lessons();
    lessons.extend(swiftui::lessons());
    Catalog::new(lessons)
});

/// The full curriculum. Built on first access, immutable afterwards.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}
