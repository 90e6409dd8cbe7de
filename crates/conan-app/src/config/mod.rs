//! Configuration file parsing for the package browser
//!
//! Supports `<config_dir>/conan-center-browser/config.toml`.

pub mod settings;
pub mod types;

pub use settings::{config_file_path, init_config_file, load_settings, load_settings_from};
pub use types::*;
