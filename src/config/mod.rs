// SPDX-License-Identifier: MPL-2.0
//! Read-only startup configuration from a `settings.toml` file.
//!
//! The file only seeds the initial selection and the form copy. Selections
//! made in the window are never written back.
//!
//! # Configuration Sections
//!
//! - `[general]` - Initial light/dark/system mode
//! - `[preview]` - Initial font, accent and radius keys, plus the form copy
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` on the command line
//! 3. `ICED_LOGIN_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_login::config;
//!
//! let (config, warning) = config::load(None);
//! if let Some(err) = warning {
//!     eprintln!("using defaults: {err}");
//! }
//! let _selection = config.initial_selection();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::catalog::{Accent, FontKey, RadiusKey};
use crate::ui::login_form::FormCopy;
use crate::ui::selection::ThemeSelection;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Initial mode of the preview (light, dark, or system).
    pub theme_mode: ThemeMode,
}

/// Initial preview selection and form copy.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PreviewConfig {
    pub font: FontKey,
    pub accent: Accent,
    pub radius: RadiusKey,

    /// Brand shown in the form header.
    pub app_name: Option<String>,

    /// Identity provider named on the secondary action.
    pub provider_name: Option<String>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            font: DEFAULT_FONT,
            accent: DEFAULT_ACCENT,
            radius: DEFAULT_RADIUS,
            app_name: None,
            provider_name: None,
        }
    }
}

// =============================================================================
// Root
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub preview: PreviewConfig,
}

impl Config {
    /// Selection the window starts with.
    #[must_use]
    pub fn initial_selection(&self) -> ThemeSelection {
        ThemeSelection::new(
            self.preview.font,
            self.preview.accent,
            self.preview.radius,
            self.general.theme_mode.is_dark(),
        )
    }

    /// Static strings of the form, falling back to the built-in brand.
    #[must_use]
    pub fn form_copy(&self) -> FormCopy {
        let defaults = FormCopy::default();
        FormCopy {
            app_name: non_blank(self.preview.app_name.as_deref()).unwrap_or(defaults.app_name),
            provider_name: non_blank(self.preview.provider_name.as_deref())
                .unwrap_or(defaults.provider_name),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Location of `settings.toml`, if any config directory can be resolved.
#[must_use]
pub fn config_path(config_dir_override: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(config_dir_override).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration, never failing.
///
/// A missing file yields defaults silently. A file that cannot be read or
/// parsed yields defaults plus the error, to be reported by the caller.
pub fn load(config_dir_override: Option<PathBuf>) -> (Config, Option<Error>) {
    let Some(path) = config_path(config_dir_override) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    }
}

/// Loads and parses the file at `path`.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}
