//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.swiftwise/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The same directory also holds `prefs.toml`, the persisted key-value
//! store backing [`FilePreferenceStore`] (the `theme` key lives there).

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::catalog::Module;
use crate::core::theme::PreferenceStore;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SwiftwiseConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_module: Option<String>,
    pub code_theme_light: Option<String>,
    pub code_theme_dark: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CODE_THEME_LIGHT: &str = "base16-ocean.light";
pub const DEFAULT_CODE_THEME_DARK: &str = "base16-ocean.dark";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_module: Module,
    pub start_lesson: Option<String>,
    pub code_theme_light: String,
    pub code_theme_dark: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.swiftwise`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".swiftwise"))
}

/// Returns the path to `~/.swiftwise/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.swiftwise/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SwiftwiseConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SwiftwiseConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SwiftwiseConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SwiftwiseConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: SwiftwiseConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# swiftwise Configuration
# All settings are optional - defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_module = "swift-basics"           # "swift-basics" or "swiftui"
# code_theme_light = "base16-ocean.light" # syntect theme for light mode
# code_theme_dark = "base16-ocean.dark"   # syntect theme for dark mode
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_module` and `cli_lesson` are from CLI flags (None = not specified).
pub fn resolve(
    config: &SwiftwiseConfig,
    cli_module: Option<Module>,
    cli_lesson: Option<String>,
) -> ResolvedConfig {
    // Starting module: CLI → env → config → default
    let start_module = cli_module
        .or_else(|| {
            std::env::var("SWIFTWISE_MODULE")
                .ok()
                .as_deref()
                .and_then(parse_module)
        })
        .or_else(|| config.general.start_module.as_deref().and_then(parse_module))
        .unwrap_or_default();

    ResolvedConfig {
        start_module,
        start_lesson: cli_lesson,
        code_theme_light: config
            .general
            .code_theme_light
            .clone()
            .unwrap_or_else(|| DEFAULT_CODE_THEME_LIGHT.to_string()),
        code_theme_dark: config
            .general
            .code_theme_dark
            .clone()
            .unwrap_or_else(|| DEFAULT_CODE_THEME_DARK.to_string()),
    }
}

fn parse_module(value: &str) -> Option<Module> {
    match value {
        "swift-basics" => Some(Module::SwiftBasics),
        "swiftui" => Some(Module::SwiftUi),
        other => {
            warn!("Unknown module '{}' in config/env, ignoring", other);
            None
        }
    }
}

// ============================================================================
// Preference store (prefs.toml)
// ============================================================================

/// Key-value store persisted as a flat TOML table at
/// `~/.swiftwise/prefs.toml`.
///
/// Failure semantics follow the trait contract: unreadable or malformed
/// files read as empty, failed writes are logged and dropped. The theme
/// subsystem must always resolve, so nothing here returns an error.
pub struct FilePreferenceStore {
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Open the default store under `~/.swiftwise`.
    pub fn open_default() -> Self {
        match config_dir() {
            Some(dir) => Self::open(dir.join("prefs.toml")),
            None => {
                warn!("Could not determine home directory, preferences will not persist");
                Self {
                    path: None,
                    values: BTreeMap::new(),
                }
            }
        }
    }

    /// Open a store at an explicit path (tests point this at a temp dir).
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = Self::read_values(&path);
        Self {
            path: Some(path),
            values,
        }
    }

    fn read_values(path: &Path) -> BTreeMap<String, String> {
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return BTreeMap::new(), // first run
        };
        match toml::from_str(&contents) {
            Ok(values) => values,
            Err(e) => {
                warn!("Malformed preferences file {}: {}", path.display(), e);
                BTreeMap::new()
            }
        }
    }

    fn flush(&self) {
        let Some(path) = &self.path else { return };
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("Failed to create preferences directory: {}", e);
                return;
            }
        }
        match toml::to_string(&self.values) {
            Ok(serialized) => {
                if let Err(e) = fs::write(path, serialized) {
                    warn!("Failed to write preferences: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize preferences: {}", e),
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.flush();
    }
}
