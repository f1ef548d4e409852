//! Swift Basics track: the language itself, for people who think in
//! TypeScript.

use crate::core::catalog::{CodeExample, Language, Lesson, LessonSection, Module, SectionBody};

pub(crate) fn lessons() -> Vec<Lesson> {
    vec![
        types_and_inference(),
        optionals(),
        value_vs_reference(),
        functions_and_closures(),
        protocols(),
    ]
}

fn types_and_inference() -> Lesson {
    Lesson {
        id: "types-and-inference",
        title: "Types & Type Inference",
        description: "Swift's type system will feel familiar - inference everywhere, explicit annotations when you want them.",
        module: Module::SwiftBasics,
        category: "Type System",
        sections: vec![
            LessonSection {
                title: "Declaring variables",
                explanation: "Swift's `let` is TypeScript's `const`, and Swift's `var` is TypeScript's `let`. Both languages infer types from the initializer, so annotations are usually **optional**.",
                tips: &[
                    "Prefer `let` everywhere, exactly like you prefer `const` - the compiler will tell you when you actually need `var`.",
                ],
                body: SectionBody::Comparison {
                    react: CodeExample::highlighting(
                        r#"const name = "Ada";        // inferred string
let count = 0;             // inferred number
const price: number = 9.99;"#,
                        &[1, 2],
                    ),
                    swiftui: CodeExample::highlighting(
                        r#"let name = "Ada"          // inferred String
var count = 0             // inferred Int
let price: Double = 9.99"#,
                        &[1, 2],
                    ),
                    left_title: None,
                    right_title: None,
                },
            },
            LessonSection {
                title: "String interpolation",
                explanation: r#"Template literals become `\(...)` interpolation. There is no separate syntax for multi-part strings - **everything** goes through the same interpolation form."#,
                tips: &[
                    "Interpolation calls the value's `description`, roughly like `toString()` - conform to `CustomStringConvertible` to customize it.",
                ],
                body: SectionBody::Comparison {
                    react: CodeExample::new(
                        r#"const greeting = `Hello, ${name}! You have ${count} items.`;"#,
                    ),
                    swiftui: CodeExample::new(
                        r#"let greeting = "Hello, \(name)! You have \(count) items.""#,
                    ),
                    left_title: None,
                    right_title: None,
                },
            },
        ],
    }
}

fn optionals() -> Lesson {
    Lesson {
        id: "optionals",
        title: "Optionals",
        description: "Swift's answer to null and undefined: absence is part of the type, and the compiler makes you deal with it.",
        module: Module::SwiftBasics,
        category: "Type System",
        sections: vec![
            LessonSection {
                title: "Optional types",
                explanation: "TypeScript unions a type with `null` or `undefined`; Swift wraps it in an **Optional**, written `String?`. The difference is enforcement - Swift will not let you touch the wrapped value without unwrapping it first.",
                tips: &[
                    "`??` works in both languages and means the same thing: fall back when the value is absent.",
                ],
                body: SectionBody::Comparison {
                    react: CodeExample::new(
                        r#"let nickname: string | null = null;
const display = nickname ?? "anonymous";"#,
                    ),
                    swiftui: CodeExample::new(
                        r#"var nickname: String? = nil
let display = nickname ?? "anonymous""#,
                    ),
                    left_title: None,
                    right_title: None,
                },
            },
            LessonSection {
                title: "if let unwrapping",
                explanation: "Where you would narrow with a truthiness check, Swift uses `if let` to unwrap into a **new constant** that only exists inside the branch.",
                tips: &[
                    "`guard let` is the early-return variant - closest to `if (!value) return;` at the top of a function.",
                    "Avoid force-unwrapping with `!` the way you avoid non-null assertions in TypeScript.",
                ],
                body: SectionBody::Comparison {
                    react: CodeExample::highlighting(
                        r#"if (nickname !== null) {
  console.log(nickname.toUpperCase());
}"#,
                        &[1],
                    ),
                    swiftui: CodeExample::highlighting(
                        r#"if let nickname {
  print(nickname.uppercased())
}"#,
                        &[1],
                    ),
                    left_title: None,
                    right_title: None,
                },
            },
        ],
    }
}

fn value_vs_reference() -> Lesson {
    Lesson {
        id: "value-vs-reference",
        title: "Value vs Reference Types",
        description: "Structs copy, classes share. SwiftUI leans almost entirely on value types - the opposite default from JavaScript objects.",
        module: Module::SwiftBasics,
        category: "Memory & Types",
        sections: vec![
            LessonSection {
                title: "Structs copy on assignment",
                explanation: "Every JavaScript object is a reference; mutating through one name is visible through another. A Swift `struct` is a **value**: assignment copies, and the copies evolve independently. SwiftUI views, `String`, `Array`, and `Dictionary` are all structs.",
                tips: &[
                    "This is why SwiftUI state updates feel like React's immutability discipline - except the language does the copying for you.",
                ],
                body: SectionBody::Comparison {
                    react: CodeExample::highlighting(
                        r#"const a = { count: 0 };
const b = a;
b.count = 5;
console.log(a.count); // 5 - shared reference"#,
                        &[4],
                    ),
                    swiftui: CodeExample::highlighting(
                        r#"struct Counter { var count = 0 }
let a = Counter()
var b = a
b.count = 5
print(a.count) // 0 - independent copy"#,
                        &[5],
                    ),
                    left_title: None,
                    right_title: None,
                },
            },
            LessonSection {
                title: "When you still want a class",
                explanation: "Reach for a `class` when identity matters - shared mutable state, long-lived model objects, anything you would have put in a context provider. Classes are Swift's reference types.",
                tips: &[],
                body: SectionBody::SingleCode {
                    code: CodeExample::new(
                        r#"final class Session {
  var user: String?
  func signOut() { user = nil }
}"#,
                    ),
                    language: Language::Swift,
                },
            },
        ],
    }
}

fn functions_and_closures() -> Lesson {
    Lesson {
        id: "functions-and-closures",
        title: "Functions & Closures",
        description: "Arrow functions map almost one-to-one onto Swift closures, down to the shorthand forms.",
        module: Module::SwiftBasics,
        category: "Functions",
        sections: vec![
            LessonSection {
                title: "Closures and shorthand arguments",
                explanation: "Swift closures use `{ parameters in body }`. For short closures there is an extra shorthand TypeScript lacks: positional arguments `$0`, `$1`, which is what you will see all over **SwiftUI modifiers** and collection code.",
                tips: &[
                    "A trailing closure moves outside the call parentheses - `items.map { ... }` - the way JSX children sit outside the props list.",
                ],
                body: SectionBody::Comparison {
                    react: CodeExample::new(
                        r#"const names = users.map((u) => u.name);
const adults = users.filter((u) => u.age >= 18);"#,
                    ),
                    swiftui: CodeExample::new(
                        r#"let names = users.map { $0.name }
let adults = users.filter { $0.age >= 18 }"#,
                    ),
                    left_title: None,
                    right_title: None,
                },
            },
            LessonSection {
                title: "Argument labels",
                explanation: "Swift functions name their arguments at the call site. Where a React codebase would pass an options object for readability, Swift bakes the labels into the **function signature** itself.",
                tips: &[
                    "An underscore before a parameter name (`_ value:`) removes the label, which is how `print(_:)` takes bare arguments.",
                ],
                body: SectionBody::SingleCode {
                    code: CodeExample::highlighting(
                        r#"func move(from start: Int, to end: Int) { /* ... */ }

move(from: 2, to: 7)"#,
                        &[3],
                    ),
                    language: Language::Swift,
                },
            },
        ],
    }
}

fn protocols() -> Lesson {
    Lesson {
        id: "protocols",
        title: "Protocols",
        description: "Interfaces with more reach: protocols are how Swift does polymorphism, and `View` itself is one.",
        module: Module::SwiftBasics,
        category: "Abstractions",
        sections: vec![
            LessonSection {
                title: "Protocols as interfaces",
                explanation: "A `protocol` declares requirements the way a TypeScript `interface` does, but conformance is always **explicit** - there is no structural typing. SwiftUI's `View` is a protocol with a single requirement: a `body`.",
                tips: &[
                    "Protocol extensions can supply default implementations, which is how SwiftUI gives every `View` hundreds of modifiers for free.",
                ],
                body: SectionBody::Comparison {
                    react: CodeExample::new(
                        r#"interface Describable {
  describe(): string;
}

class Point implements Describable {
  describe() { return "a point"; }
}"#,
                    ),
                    swiftui: CodeExample::new(
                        r#"protocol Describable {
  func describe() -> String
}

struct Point: Describable {
  func describe() -> String { "a point" }
}"#,
                    ),
                    left_title: None,
                    right_title: None,
                },
            },
        ],
    }
}
