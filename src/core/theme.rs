//! # Theme Preference
//!
//! Resolves and maintains the active light/dark theme, reconciling three
//! signals with a strict override chain:
//!
//! ```text
//! persisted preference  >  OS appearance signal  >  Dark (fallback)
//! ```
//!
//! The chain is an override, not a merge: once the user toggles explicitly,
//! the persisted value wins over any later OS appearance change until the
//! stored key is cleared externally.
//!
//! State lives behind an `Arc<Mutex<…>>` so a change listener running on
//! another thread can never observe a half-applied resolution. All writes
//! go through [`ThemeManager::toggle`] or the OS-change handler.

use std::sync::{Arc, Mutex, Weak};

/// Key under which the explicit user choice is persisted.
pub const THEME_KEY: &str = "theme";

/// The binary display choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stored string form (`"light"` / `"dark"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything else is treated as "no preference".
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Map an OS "prefers light" report to a theme.
    pub fn from_prefers_light(prefers_light: bool) -> Theme {
        if prefers_light { Theme::Light } else { Theme::Dark }
    }
}

/// Abstract key-value store the theme choice is persisted in.
///
/// Implementations never error: an unavailable backing store reads as
/// absent and drops writes (with a `warn!`), so the manager always
/// resolves to a definite theme.
pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

struct ThemeState {
    active: Theme,
    store: Box<dyn PreferenceStore>,
}

/// Owns the active theme and its persistence. Cheap to clone; clones share
/// the same state, which is what lets a change-signal handler and the event
/// loop agree on one value.
#[derive(Clone)]
pub struct ThemeManager {
    inner: Arc<Mutex<ThemeState>>,
}

impl ThemeManager {
    /// Resolve the initial theme and take ownership of the store.
    ///
    /// Runs the full precedence chain once, synchronously: a stored
    /// `"light"`/`"dark"` wins; otherwise `system_prefers_light` decides;
    /// `false` (or no signal at all) falls back to dark.
    pub fn new(store: Box<dyn PreferenceStore>, system_prefers_light: bool) -> Self {
        let active = store
            .get(THEME_KEY)
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or_else(|| Theme::from_prefers_light(system_prefers_light));
        Self {
            inner: Arc::new(Mutex::new(ThemeState { active, store })),
        }
    }

    pub fn current(&self) -> Theme {
        self.lock().active
    }

    /// Flip the active theme and persist the new value as the user's
    /// explicit choice. Total: after this returns, store and active state
    /// agree, and OS appearance changes no longer move the theme.
    pub fn toggle(&self) -> Theme {
        let mut state = self.lock();
        let next = state.active.toggled();
        state.active = next;
        state.store.set(THEME_KEY, next.as_str());
        next
    }

    /// React to an OS appearance change. Adopted only while no persisted
    /// preference exists; an explicit user choice wins permanently.
    pub fn system_changed(&self, prefers_light: bool) {
        let mut state = self.lock();
        if state.store.get(THEME_KEY).as_deref().and_then(Theme::parse).is_some() {
            return;
        }
        state.active = Theme::from_prefers_light(prefers_light);
    }

    /// Subscribe this manager to an appearance signal. The returned
    /// [`Subscription`] unregisters the handler when dropped.
    pub fn watch(&self, signal: &AppearanceSignal) -> Subscription {
        let manager = self.clone();
        signal.subscribe(move |prefers_light| manager.system_changed(prefers_light))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ThemeState> {
        // A poisoned lock means a handler panicked mid-update; the theme
        // value itself is still a valid enum, so recover it.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

type Handler = Box<dyn FnMut(bool) + Send>;

struct SignalState {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

/// Publisher for OS "prefers light" change notifications.
///
/// The hosting environment calls [`AppearanceSignal::emit`] whenever the
/// ambient appearance flips; every live subscriber runs synchronously in
/// registration order.
#[derive(Clone)]
pub struct AppearanceSignal {
    inner: Arc<Mutex<SignalState>>,
}

impl Default for AppearanceSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl AppearanceSignal {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SignalState {
                next_id: 0,
                handlers: Vec::new(),
            })),
        }
    }

    /// Register a change handler. Dropping (or cancelling) the returned
    /// subscription removes it.
    pub fn subscribe(&self, handler: impl FnMut(bool) + Send + 'static) -> Subscription {
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;
        state.handlers.push((id, Box::new(handler)));
        Subscription {
            signal: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Notify all subscribers of a new "prefers light" value.
    pub fn emit(&self, prefers_light: bool) {
        let mut state = self.lock();
        for (_, handler) in state.handlers.iter_mut() {
            handler(prefers_light);
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.lock().handlers.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SignalState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Scoped handle for a registered appearance handler.
///
/// Releases exactly once: `cancel` is idempotent and `Drop` calls it, so a
/// subscription can never leak past its owner. Works like the terminal mode
/// guard in `tui` - acquire on init, release on teardown.
pub struct Subscription {
    signal: Weak<Mutex<SignalState>>,
    id: u64,
}

impl Subscription {
    /// Unregister the handler. Safe to call repeatedly; a no-op once the
    /// signal itself is gone.
    pub fn cancel(&mut self) {
        if let Some(inner) = self.signal.upgrade() {
            let mut state = inner.lock().unwrap_or_else(|e| e.into_inner());
            state.handlers.retain(|(id, _)| *id != self.id);
        }
        self.signal = Weak::new();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Best-effort probe of the OS appearance preference.
///
/// Returns `true` when the desktop reports a light appearance. Any failure
/// (headless session, missing tooling, unknown desktop) reads as "does not
/// prefer light", which the precedence chain turns into dark.
pub fn detect_system_prefers_light() -> bool {
    !system_prefers_dark()
}

#[cfg(target_os = "linux")]
fn system_prefers_dark() -> bool {
    use std::process::Command;

    if let Ok(output) = Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", "color-scheme"])
        .output()
    {
        let scheme = String::from_utf8_lossy(&output.stdout);
        if scheme.contains("prefer-dark") {
            return true;
        }
        if scheme.contains("prefer-light") {
            return false;
        }
    }

    if let Ok(output) = Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", "gtk-theme"])
        .output()
    {
        let theme = String::from_utf8_lossy(&output.stdout).to_lowercase();
        if theme.contains("dark") {
            return true;
        }
    }

    // No usable signal: fall through to dark
    true
}

#[cfg(target_os = "macos")]
fn system_prefers_dark() -> bool {
    use std::process::Command;

    // AppleInterfaceStyle is only set when dark mode is on; the read
    // failing outright means light mode.
    match Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
    {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout)
                .to_lowercase()
                .contains("dark")
        }
        _ => false,
    }
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn system_prefers_dark() -> bool {
    log::warn!("No system appearance probe for this platform, assuming dark");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryStore;

    fn manager(stored: Option<&str>, prefers_light: bool) -> ThemeManager {
        let mut store = MemoryStore::new();
        if let Some(value) = stored {
            store.set(THEME_KEY, value);
        }
        ThemeManager::new(Box::new(store), prefers_light)
    }

    #[test]
    fn stored_preference_wins_over_os_signal() {
        assert_eq!(manager(Some("light"), false).current(), Theme::Light);
        assert_eq!(manager(Some("dark"), true).current(), Theme::Dark);
    }

    #[test]
    fn os_signal_decides_when_nothing_stored() {
        assert_eq!(manager(None, true).current(), Theme::Light);
        assert_eq!(manager(None, false).current(), Theme::Dark);
    }

    #[test]
    fn garbage_stored_value_falls_through_to_os_signal() {
        assert_eq!(manager(Some("solarized"), true).current(), Theme::Light);
        assert_eq!(manager(Some(""), false).current(), Theme::Dark);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let mgr = manager(None, false);
        assert_eq!(mgr.current(), Theme::Dark);

        assert_eq!(mgr.toggle(), Theme::Light);
        assert_eq!(mgr.current(), Theme::Light);
        assert_eq!(mgr.lock().store.get(THEME_KEY).as_deref(), Some("light"));

        // Twice in succession returns to the original value, and the
        // store tracks each step.
        assert_eq!(mgr.toggle(), Theme::Dark);
        assert_eq!(mgr.lock().store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn os_change_adopted_without_stored_preference() {
        let mgr = manager(None, false);
        mgr.system_changed(true);
        assert_eq!(mgr.current(), Theme::Light);
        mgr.system_changed(false);
        assert_eq!(mgr.current(), Theme::Dark);
    }

    #[test]
    fn os_change_suppressed_after_explicit_choice() {
        let mgr = manager(None, false);
        mgr.toggle(); // now Light, persisted
        mgr.system_changed(false);
        assert_eq!(mgr.current(), Theme::Light);
        mgr.system_changed(true);
        assert_eq!(mgr.current(), Theme::Light);
    }

    #[test]
    fn watch_routes_signal_to_manager() {
        let mgr = manager(None, false);
        let signal = AppearanceSignal::new();
        let _sub = mgr.watch(&signal);

        signal.emit(true);
        assert_eq!(mgr.current(), Theme::Light);
        signal.emit(false);
        assert_eq!(mgr.current(), Theme::Dark);
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let mgr = manager(None, false);
        let signal = AppearanceSignal::new();
        let sub = mgr.watch(&signal);
        assert_eq!(signal.subscriber_count(), 1);

        drop(sub);
        assert_eq!(signal.subscriber_count(), 0);

        signal.emit(true);
        assert_eq!(mgr.current(), Theme::Dark, "handler must not fire after drop");
    }

    #[test]
    fn cancel_is_idempotent() {
        let signal = AppearanceSignal::new();
        let mut sub = signal.subscribe(|_| {});
        sub.cancel();
        sub.cancel();
        assert_eq!(signal.subscriber_count(), 0);
    }

    #[test]
    fn cancel_after_signal_dropped_is_noop() {
        let signal = AppearanceSignal::new();
        let mut sub = signal.subscribe(|_| {});
        drop(signal);
        sub.cancel(); // must not panic on a dead publisher
    }

    #[test]
    fn end_to_end_precedence_scenario() {
        // No stored key, OS reports dark → dark. Toggle → light, stored.
        // Any later OS change is ignored: the stored value wins.
        let mgr = manager(None, false);
        let signal = AppearanceSignal::new();
        let _sub = mgr.watch(&signal);

        assert_eq!(mgr.current(), Theme::Dark);
        mgr.toggle();
        assert_eq!(mgr.current(), Theme::Light);
        signal.emit(false);
        assert_eq!(mgr.current(), Theme::Light);
    }

    #[test]
    fn theme_parse_round_trip() {
        assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
        assert_eq!(Theme::parse("LIGHT"), None);
    }
}
