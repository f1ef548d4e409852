//! End-to-end theme resolution tests through the public API.
//!
//! These exercise the full precedence chain (persisted choice > OS
//! appearance > dark fallback) the way the app uses it: a store that
//! outlives the manager, and OS changes arriving through an
//! `AppearanceSignal` subscription.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use swiftwise::core::theme::{
    AppearanceSignal, PreferenceStore, THEME_KEY, Theme, ThemeManager,
};

/// Store whose contents the test can inspect after handing a clone to
/// the manager, like a prefs file surviving across app runs.
#[derive(Clone, Default)]
struct SharedStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl SharedStore {
    fn new() -> Self {
        Self::default()
    }

    fn stored_theme(&self) -> Option<String> {
        self.values.lock().unwrap().get(THEME_KEY).cloned()
    }

    fn preset(value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .lock()
            .unwrap()
            .insert(THEME_KEY.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for SharedStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

#[test]
fn persisted_choice_beats_os_appearance() {
    let store = SharedStore::preset("light");
    let manager = ThemeManager::new(Box::new(store), false);
    assert_eq!(manager.current(), Theme::Light);
}

#[test]
fn os_appearance_decides_without_persisted_choice() {
    let manager = ThemeManager::new(Box::new(SharedStore::new()), true);
    assert_eq!(manager.current(), Theme::Light);

    let manager = ThemeManager::new(Box::new(SharedStore::new()), false);
    assert_eq!(manager.current(), Theme::Dark);
}

#[test]
fn garbage_in_store_falls_through_to_os_signal() {
    let store = SharedStore::preset("solarized");
    let manager = ThemeManager::new(Box::new(store), true);
    assert_eq!(manager.current(), Theme::Light);
}

#[test]
fn toggle_persists_across_restarts() {
    let store = SharedStore::new();
    let manager = ThemeManager::new(Box::new(store.clone()), false);
    assert_eq!(manager.current(), Theme::Dark);

    manager.toggle();
    assert_eq!(manager.current(), Theme::Light);
    assert_eq!(store.stored_theme().as_deref(), Some("light"));

    // "Restart": a new manager over the same store ignores the OS
    drop(manager);
    let manager = ThemeManager::new(Box::new(store.clone()), false);
    assert_eq!(manager.current(), Theme::Light);
}

#[test]
fn os_change_through_signal_is_adopted_until_user_chooses() {
    let store = SharedStore::new();
    let manager = ThemeManager::new(Box::new(store.clone()), false);
    let signal = AppearanceSignal::new();
    let _subscription = manager.watch(&signal);

    // No explicit choice yet: OS changes move the theme
    signal.emit(true);
    assert_eq!(manager.current(), Theme::Light);
    signal.emit(false);
    assert_eq!(manager.current(), Theme::Dark);
    // Adopted values are not written back as a user choice
    assert_eq!(store.stored_theme(), None);

    // After an explicit toggle, OS changes are ignored
    manager.toggle();
    assert_eq!(manager.current(), Theme::Light);
    signal.emit(false);
    assert_eq!(manager.current(), Theme::Light);
}

#[test]
fn dropped_subscription_stops_os_updates() {
    let manager = ThemeManager::new(Box::new(SharedStore::new()), false);
    let signal = AppearanceSignal::new();

    let subscription = manager.watch(&signal);
    signal.emit(true);
    assert_eq!(manager.current(), Theme::Light);

    drop(subscription);
    signal.emit(false);
    assert_eq!(manager.current(), Theme::Light, "emit after drop is ignored");
}

#[test]
fn full_session_scenario() {
    let store = SharedStore::new();

    // First launch: no pref, OS is dark
    let manager = ThemeManager::new(Box::new(store.clone()), false);
    let signal = AppearanceSignal::new();
    let subscription = manager.watch(&signal);
    assert_eq!(manager.current(), Theme::Dark);

    // OS flips to light mid-session, theme follows
    signal.emit(true);
    assert_eq!(manager.current(), Theme::Light);

    // User toggles back to dark, which persists
    manager.toggle();
    assert_eq!(manager.current(), Theme::Dark);
    assert_eq!(store.stored_theme().as_deref(), Some("dark"));

    // Later OS flips do nothing
    signal.emit(true);
    assert_eq!(manager.current(), Theme::Dark);

    // Quit and relaunch with the OS in light mode: stored choice wins
    drop(subscription);
    drop(manager);
    let manager = ThemeManager::new(Box::new(store), true);
    assert_eq!(manager.current(), Theme::Dark);
}
