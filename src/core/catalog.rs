//! # Lesson Catalog
//!
//! The read-only query layer over the compiled-in curriculum. This module
//! contains domain logic only - no TUI-specific types. Presentation lives
//! in the `tui` module.
//!
//! ```text
//! Catalog
//! └── lessons: Vec<Lesson>          // declaration order = display order
//!      ├── id: &'static str          // unique, used for lookups/--lesson
//!      ├── module: Module            // swift-basics | swiftui
//!      ├── category: &'static str    // free-form sidebar grouping label
//!      └── sections: [LessonSection] // ordered teaching points
//! ```
//!
//! Every query is a pure function over immutable data: calling one twice
//! with the same input yields identical output. Absence (`lesson_by_id`
//! with an unknown id) is an `Option::None`, not an error.

use std::collections::HashSet;

use clap::ValueEnum;

/// Top-level track a lesson belongs to. Partitions the sidebar into
/// two tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Module {
    #[default]
    #[value(name = "swift-basics")]
    SwiftBasics,
    #[value(name = "swiftui")]
    SwiftUi,
}

impl Module {
    /// Stable identifier, matches the CLI value and lesson data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Module::SwiftBasics => "swift-basics",
            Module::SwiftUi => "swiftui",
        }
    }

    /// Human-readable tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Module::SwiftBasics => "Swift Basics",
            Module::SwiftUi => "SwiftUI",
        }
    }

    /// The other track (Tab key cycles between the two).
    pub fn next(&self) -> Module {
        match self {
            Module::SwiftBasics => Module::SwiftUi,
            Module::SwiftUi => Module::SwiftBasics,
        }
    }

    pub fn all() -> &'static [Module] {
        &[Module::SwiftBasics, Module::SwiftUi]
    }
}

/// Source language of a standalone code example.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    Swift,
    TypeScript,
}

impl Language {
    /// Token syntect uses to find the matching syntax definition.
    pub fn syntax_token(&self) -> &'static str {
        match self {
            Language::Swift => "swift",
            Language::TypeScript => "ts",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::Swift => "Swift",
            Language::TypeScript => "TypeScript",
        }
    }
}

/// One code snippet, with optional 1-based line numbers to emphasize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeExample {
    pub code: &'static str,
    pub highlight_lines: &'static [usize],
}

impl CodeExample {
    pub const fn new(code: &'static str) -> Self {
        Self {
            code,
            highlight_lines: &[],
        }
    }

    pub const fn highlighting(code: &'static str, lines: &'static [usize]) -> Self {
        Self {
            code,
            highlight_lines: lines,
        }
    }
}

/// One teaching point inside a lesson.
///
/// `explanation` and each tip carry a restricted inline markup subset:
/// `**bold**` and `` `code` `` spans only. Rendering happens in
/// `tui::markup`.
#[derive(Clone, Debug)]
pub struct LessonSection {
    pub title: &'static str,
    pub explanation: &'static str,
    pub tips: &'static [&'static str],
    pub body: SectionBody,
}

/// The two section formats.
#[derive(Clone, Debug)]
pub enum SectionBody {
    /// Equivalent snippets shown side by side: React on the left,
    /// SwiftUI on the right. Pane captions default to the language
    /// names unless overridden.
    Comparison {
        react: CodeExample,
        swiftui: CodeExample,
        left_title: Option<&'static str>,
        right_title: Option<&'static str>,
    },
    /// A single snippet, used when no comparison is meaningful.
    SingleCode {
        code: CodeExample,
        language: Language,
    },
}

/// One teachable unit: ordered sections plus sidebar metadata.
#[derive(Clone, Debug)]
pub struct Lesson {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub module: Module,
    pub category: &'static str,
    pub sections: Vec<LessonSection>,
}

/// Immutable lesson list with pure query functions. Built once at startup
/// (see `content::catalog()`); never mutated afterwards.
pub struct Catalog {
    lessons: Vec<Lesson>,
}

impl Catalog {
    /// Wrap a lesson list. Ids must be unique across the whole catalog;
    /// duplicates are a content-authoring bug.
    pub fn new(lessons: Vec<Lesson>) -> Self {
        debug_assert!(
            {
                let mut seen = HashSet::new();
                lessons.iter().all(|l| seen.insert(l.id))
            },
            "duplicate lesson id in catalog"
        );
        Self { lessons }
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Look up one lesson by its stable id. Unknown ids are absence,
    /// handled by the caller as a not-found view.
    pub fn lesson_by_id(&self, id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == id)
    }

    /// All lessons in a track, preserving catalog declaration order.
    pub fn lessons_for_module(&self, module: Module) -> Vec<&Lesson> {
        self.lessons.iter().filter(|l| l.module == module).collect()
    }

    /// Distinct categories appearing in a track, in first-occurrence order.
    ///
    /// Deliberately not sorted: sidebar grouping follows the curated order
    /// lessons were authored in, not the alphabet.
    pub fn categories_for_module(&self, module: Module) -> Vec<&'static str> {
        distinct_in_order(
            self.lessons
                .iter()
                .filter(|l| l.module == module)
                .map(|l| l.category),
        )
    }

    /// Distinct categories across the entire catalog, same ordering
    /// contract as [`Self::categories_for_module`].
    pub fn all_categories(&self) -> Vec<&'static str> {
        distinct_in_order(self.lessons.iter().map(|l| l.category))
    }
}

/// Stable unique: drop duplicates, keep the original relative order.
fn distinct_in_order(
    categories: impl Iterator<Item = &'static str>,
) -> Vec<&'static str> {
    let mut seen = HashSet::new();
    categories.filter(|c| seen.insert(*c)).collect()
}
