//! Settings parser for config.toml

use super::types::Settings;
use conan_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "conan-center-browser";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG: &str = concat!(
    r#"# ConanCenter browser configuration

[api]
base_url = "https://conan.io/api/private"
timeout_secs = 30
user_agent = "ccbrowse/"#,
    env!("CARGO_PKG_VERSION"),
    r#""

[clipboard]
confirm_ms = 1500   # How long "Copied!" stays visible

[ui]
icons = "unicode"   # "unicode" or "nerd_fonts"
"#
);

/// Location of the user config file (`<config_dir>/conan-center-browser/config.toml`)
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the user config file, defaulting when absent
pub fn load_settings() -> Settings {
    match config_file_path() {
        Some(path) => load_settings_from(&path),
        None => {
            debug!("No config directory on this platform, using defaults");
            Settings::default()
        }
    }
}

/// Load settings from a specific file.
///
/// A missing or unparsable file yields the defaults; the failure is logged.
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write the commented default config file if none exists.
///
/// Returns `true` when a file was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;
    info!("Created default config at {:?}", config_path);
    Ok(true)
}
