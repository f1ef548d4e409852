//! SwiftUI track: the framework, mapped concept-by-concept onto React.

use crate::core::catalog::{CodeExample, Language, Lesson, LessonSection, Module, SectionBody};

pub(crate) fn lessons() -> Vec<Lesson> {
    vec![
        views_and_components(),
        modifiers_and_styling(),
        state_management(),
        bindings(),
        observable_objects(),
        lists_and_identity(),
    ]
}

fn views_and_components() -> Lesson {
    Lesson {
        id: "views-and-components",
        title: "Views & Components",
        description: "A SwiftUI View is a function component: a lightweight description of UI, recomputed whenever its inputs change.",
        module: Module::SwiftUi,
        category: "Building Blocks",
        sections: vec![
            LessonSection {
                title: "Your first view",
                explanation: "A function component returning JSX becomes a `struct` conforming to `View` with a computed `body`. Both are **descriptions**, not live objects - the framework diffs the description against what is on screen.",
                tips: &[
                    "SwiftUI view structs are created and thrown away constantly, like React elements. Keep them cheap; state lives elsewhere.",
                ],
                body: SectionBody::Comparison {
                    react: CodeExample::new(
                        r#"function Greeting({ name }: { name: string }) {
  return <h1>Hello, {name}!</h1>;
}"#,
                    ),
                    swiftui: CodeExample::new(
                        r#"struct Greeting: View {
  let name: String
  var body: some View {
    Text("Hello, \(name)!")
      .font(.largeTitle)
  }
}"#,
                    ),
                    left_title: None,
                    right_title: None,
                },
            },
            LessonSection {
                title: "Composition",
                explanation: "Stacks replace flexbox containers: `VStack` is a column, `HStack` a row, `ZStack` overlaps. Children are listed in a **view builder** block instead of JSX children.",
                tips: &[
                    "`spacing:` on a stack is your `gap`. Alignment goes on the stack too, not on the children.",
                ],
                body: SectionBody::Comparison {
                    react: CodeExample::highlighting(
                        r#"<div style={{ display: "flex", flexDirection: "column", gap: 8 }}>
  <Avatar user={user} />
  <span>{user.name}</span>
</div>"#,
                        &[1],
                    ),
                    swiftui: CodeExample::highlighting(
                        r#"VStack(spacing: 8) {
  Avatar(user: user)
  Text(user.name)
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

fn modifiers_and_styling() -> Lesson {
    Lesson {
        id: "modifiers-and-styling",
        title: "View Modifiers & Styling",
        description: "No stylesheets: styling is a chain of modifier calls, and order matters.",
        module: Module::SwiftUi,
        category: "Building Blocks",
        sections: vec![
            LessonSection {
                title: "Modifier chains",
                explanation: "Each modifier wraps the view in a new one, so the chain reads **outward**: `.padding()` then `.background(...)` puts the background behind the padding, while the reverse order hugs the text. There is no cascade to reason about.",
                tips: &[
                    "When a modifier seems to do nothing, check the order first - it is the SwiftUI equivalent of a specificity bug.",
                ],
                body: SectionBody::Comparison {
                    react: CodeExample::new(
                        r#".badge {
  padding: 8px;
  background: teal;
  border-radius: 6px;
  color: white;
}"#,
                    ),
                    swiftui: CodeExample::new(
                        r#"Text("NEW")
  .foregroundStyle(.white)
  .padding(8)
  .background(.teal)
  .clipShape(RoundedRectangle(cornerRadius: 6))"#,
                    ),
                    left_title: Some("CSS"),
                    right_title: None,
                },
            },
        ],
    }
}

fn state_management() -> Lesson {
    Lesson {
        id: "state-management",
        title: "@State & useState",
        description: "Local component state, SwiftUI style: a property wrapper instead of a hook, with the same re-render contract.",
        module: Module::SwiftUi,
        category: "State",
        sections: vec![
            LessonSection {
                title: "Local state",
                explanation: "`@State` declares storage the framework owns across re-renders, exactly like `useState`. Assigning to the property **is** the setter call - no tuple destructuring, no updater function.",
                tips: &[
                    "Mark `@State` properties `private`. They are implementation details of the view, never part of its API.",
                    "Rule of thumb: `@State` for value types the view owns; anything shared moves up, same as lifting state in React.",
                ],
                body: SectionBody::Comparison {
                    react: CodeExample::highlighting(
                        r#"function Counter() {
  const [count, setCount] = useState(0);
  return (
    <button onClick={() => setCount(count + 1)}>
      Count: {count}
    </button>
  );
}"#,
                        &[2, 4],
                    ),
                    swiftui: CodeExample::highlighting(
                        r#"struct Counter: View {
  @State private var count = 0
  var body: some View {
    Button("Count: \(count)") {
      count += 1
    }
  }
}"#,
                        &[2, 5],
                    ),
                    left_title: None,
                    right_title: None,
                },
            },
        ],
    }
}

fn bindings() -> Lesson {
    Lesson {
        id: "bindings",
        title: "@Binding & Lifting State",
        description: "Two-way connections to someone else's state - the pattern React spells value-plus-onChange.",
        module: Module::SwiftUi,
        category: "State",
        sections: vec![
            LessonSection {
                title: "Passing state down, writes back up",
                explanation: "React passes a value and a callback; SwiftUI passes a single `@Binding`, created from `@State` with the `$` prefix. Reads and writes both travel through it, so the child never owns the data.",
                tips: &[
                    "`$count` on an `@State` property gives you a `Binding<Int>` - think of `$` as bundling `value` and `setValue` into one handle.",
                ],
                body: SectionBody::Comparison {
                    react: CodeExample::highlighting(
                        r#"function Parent() {
  const [isOn, setIsOn] = useState(false);
  return <Toggle value={isOn} onChange={setIsOn} />;
}

function Toggle({ value, onChange }) {
  return <input type="checkbox" checked={value}
                onChange={(e) => onChange(e.target.checked)} />;
}"#,
                        &[3],
                    ),
                    swiftui: CodeExample::highlighting(
                        r#"struct Parent: View {
  @State private var isOn = false
  var body: some View {
    LabeledToggle(isOn: $isOn)
  }
}

struct LabeledToggle: View {
  @Binding var isOn: Bool
  var body: some View {
    Toggle("Enabled", isOn: $isOn)
  }
}"#,
                        &[4, 9],
                    ),
                    left_title: None,
                    right_title: None,
                },
            },
        ],
    }
}

fn observable_objects() -> Lesson {
    Lesson {
        id: "observable-objects",
        title: "Observable Objects",
        description: "Shared app state without prop drilling: SwiftUI's answer to context plus an external store.",
        module: Module::SwiftUi,
        category: "Data Flow",
        sections: vec![
            LessonSection {
                title: "Environment objects vs context",
                explanation: "An `@Observable` class injected with `.environment(...)` plays the role of a **context provider**; any descendant can read it without threading props. Mutations notify exactly the views that read the changed property.",
                tips: &[
                    "Unlike context, observation is per-property: a view that only reads `store.user` will not re-render when `store.cart` changes.",
                ],
                body: SectionBody::Comparison {
                    react: CodeExample::new(
                        r#"const StoreContext = createContext<Store>(null!);

function App() {
  return (
    <StoreContext.Provider value={store}>
      <Cart />
    </StoreContext.Provider>
  );
}

function Cart() {
  const store = useContext(StoreContext);
  return <span>{store.items.length}</span>;
}"#,
                    ),
                    swiftui: CodeExample::new(
                        r#"@Observable final class Store {
  var items: [Item] = []
}

struct RootView: View {
  @State private var store = Store()
  var body: some View {
    Cart().environment(store)
  }
}

struct Cart: View {
  @Environment(Store.self) private var store
  var body: some View { Text("\(store.items.count)") }
}"#,
                    ),
                    left_title: None,
                    right_title: None,
                },
            },
        ],
    }
}

fn lists_and_identity() -> Lesson {
    Lesson {
        id: "lists-and-identity",
        title: "Lists & Identity",
        description: "Rendering collections, and why SwiftUI's ForEach asks for the same thing as React's key prop.",
        module: Module::SwiftUi,
        category: "Building Blocks",
        sections: vec![
            LessonSection {
                title: "ForEach and keys",
                explanation: "`ForEach` needs stable identity for the same reason `key` exists: the framework matches old and new children by id when **diffing**. Conforming your model to `Identifiable` is the idiomatic way to provide it.",
                tips: &[
                    "`id: \\.self` is the index-as-key of SwiftUI - fine for static data, a reordering bug waiting to happen otherwise.",
                ],
                body: SectionBody::Comparison {
                    react: CodeExample::highlighting(
                        r#"<ul>
  {todos.map((todo) => (
    <TodoRow key={todo.id} todo={todo} />
  ))}
</ul>"#,
                        &[3],
                    ),
                    swiftui: CodeExample::highlighting(
                        r#"List {
  ForEach(todos) { todo in
    TodoRow(todo: todo)
  }
}
// works because: struct Todo: Identifiable { let id: UUID; ... }"#,
                        &[2, 6],
                    ),
                    left_title: None,
                    right_title: None,
                },
            },
        ],
    }
}
