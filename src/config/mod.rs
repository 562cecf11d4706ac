// SPDX-License-Identifier: MPL-2.0
//! Presenter configuration, loaded from and saved to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[selection]` - Select mode and per-media-type caps
//! - `[info_bar]` - Title date format, time zone offset and captions
//! - `[diagnostics]` - Activity journal length
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `PHOTO_PRESENTER_CONFIG_DIR` environment variable
//! 3. Falls back to the platform config directory (via `dirs`)
//!
//! # Examples
//!
//! ```no_run
//! use photo_presenter::config::{self, Config};
//! use photo_presenter::domain::selection::SelectMode;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.selection.mode = SelectMode::Single;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::selection::SelectMode;
use crate::error::{Error, Result};
use crate::media::SelectionLimits;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PhotoPresenter";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PHOTO_PRESENTER_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Selection policy settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionConfig {
    /// Single or multiple selection.
    #[serde(default)]
    pub mode: SelectMode,

    /// Maximum selected images in multiple mode.
    #[serde(default = "default_max_image_selections")]
    pub max_image_selections: usize,

    /// Maximum selected videos in multiple mode.
    #[serde(default = "default_max_video_selections")]
    pub max_video_selections: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            mode: SelectMode::default(),
            max_image_selections: DEFAULT_MAX_IMAGE_SELECTIONS,
            max_video_selections: DEFAULT_MAX_VIDEO_SELECTIONS,
        }
    }
}

impl SelectionConfig {
    /// Caps to hand to a [`PhotoCollection`](crate::media::PhotoCollection).
    #[must_use]
    pub fn limits(&self) -> SelectionLimits {
        SelectionLimits::new(self.max_image_selections, self.max_video_selections)
    }
}

/// Info bar settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InfoBarConfig {
    /// strftime pattern for the creation date shown as title.
    #[serde(default = "default_title_format")]
    pub title_format: String,

    /// Fixed offset from UTC used to render dates, in minutes.
    /// `None` renders in UTC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,

    /// Action caption when the photo is not selected.
    #[serde(default = "default_select_caption")]
    pub select_caption: String,

    /// Action caption when the photo is selected.
    #[serde(default = "default_deselect_caption")]
    pub deselect_caption: String,
}

impl Default for InfoBarConfig {
    fn default() -> Self {
        Self {
            title_format: default_title_format(),
            utc_offset_minutes: None,
            select_caption: default_select_caption(),
            deselect_caption: default_deselect_caption(),
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of activity events kept in memory.
    #[serde(default = "default_journal_capacity")]
    pub journal_capacity: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            journal_capacity: DEFAULT_JOURNAL_CAPACITY,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Presenter configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub info_bar: InfoBarConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_max_image_selections() -> usize {
    DEFAULT_MAX_IMAGE_SELECTIONS
}

fn default_max_video_selections() -> usize {
    DEFAULT_MAX_VIDEO_SELECTIONS
}

fn default_title_format() -> String {
    DEFAULT_TITLE_FORMAT.to_string()
}

fn default_select_caption() -> String {
    DEFAULT_SELECT_CAPTION.to_string()
}

fn default_deselect_caption() -> String {
    DEFAULT_DESELECT_CAPTION.to_string()
}

fn default_journal_capacity() -> usize {
    DEFAULT_JOURNAL_CAPACITY
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
///
/// Priority: explicit override, then [`ENV_CONFIG_DIR`], then the platform
/// config directory.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    let dir = base_dir
        .or_else(|| std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from))
        .or_else(|| {
            dirs::config_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })?;
    Some(dir.join(CONFIG_FILE))
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (Config::default(), Some(err.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
/// if it is not valid TOML for [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Propagates errors from [`save_to_path`].
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Propagates errors from [`save_to_path`].
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns [`Error::Io`] on filesystem failures and [`Error::Config`] if
/// serialization fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
