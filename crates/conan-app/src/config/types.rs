//! Configuration types for the package browser
//!
//! Defines `Settings` and its sections, all deserialized from
//! `config.toml` with per-field defaults.

use serde::{Deserialize, Serialize};

/// Default ConanCenter private API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://conan.io/api/private";

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub clipboard: ClipboardSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Registry API settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL of the private API; `/package/<id>` is appended
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("ccbrowse/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Clipboard settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClipboardSettings {
    /// How long "Copied!" stays visible after a successful copy
    #[serde(default = "default_confirm_ms")]
    pub confirm_ms: u64,
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            confirm_ms: default_confirm_ms(),
        }
    }
}

fn default_confirm_ms() -> u64 {
    1500
}

/// Icon rendering mode for the TUI.
///
/// Controls whether icons use Nerd Font glyphs (requires a Nerd Font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub icons: IconMode,
}
