//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;

use crate::core::catalog::{Catalog, CodeExample, Lesson, LessonSection, Module, SectionBody};
use crate::core::theme::PreferenceStore;

/// In-memory preference store for tests that don't need a real file.
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

fn section(title: &'static str) -> LessonSection {
    LessonSection {
        title,
        explanation: "Both languages infer the type from the initializer.",
        tips: &[],
        body: SectionBody::Comparison {
            react: CodeExample::new("const x = 1;"),
            swiftui: CodeExample::new("let x = 1"),
            left_title: None,
            right_title: None,
        },
    }
}

/// A small fixed catalog with known ids, categories, and ordering.
///
/// Layout matters to the query tests: two Swift Basics lessons share
/// "Type System" before "Memory & Types" appears, and the two SwiftUI
/// lessons share "State".
pub fn test_catalog() -> Catalog {
    Catalog::new(vec![
        Lesson {
            id: "types-and-inference",
            title: "Types & Type Inference",
            description: "How Swift's type system compares to TypeScript.",
            module: Module::SwiftBasics,
            category: "Type System",
            sections: vec![section("Inference")],
        },
        Lesson {
            id: "optionals",
            title: "Optionals",
            description: "Swift's answer to null and undefined.",
            module: Module::SwiftBasics,
            category: "Type System",
            sections: vec![section("Optional chaining")],
        },
        Lesson {
            id: "value-vs-reference",
            title: "Value vs Reference Types",
            description: "Structs copy, classes share.",
            module: Module::SwiftBasics,
            category: "Memory & Types",
            sections: vec![section("Structs and classes")],
        },
        Lesson {
            id: "state-management",
            title: "State Management",
            description: "@State is useState with different spelling.",
            module: Module::SwiftUi,
            category: "State",
            sections: vec![section("Local state")],
        },
        Lesson {
            id: "bindings",
            title: "Bindings",
            description: "Two-way state sharing without prop drilling.",
            module: Module::SwiftUi,
            category: "State",
            sections: vec![section("Dollar-sign syntax")],
        },
    ])
}
