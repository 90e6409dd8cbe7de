//! ccbrowse - ConanCenter package page in the terminal
//!
//! This is the binary entry point. All logic lives in the library crates.

use clap::Parser;
use conan_app::config::{self, Settings};
use conan_app::services::validate_package_id;
use conan_core::prelude::*;

/// ConanCenter package page in the terminal
#[derive(Parser, Debug)]
#[command(name = "ccbrowse")]
#[command(about = "Browse a ConanCenter package page from the terminal", long_about = None)]
struct Args {
    /// Package name, e.g. `zlib`
    #[arg(value_name = "PACKAGE", required_unless_present = "init_config")]
    package: Option<String>,

    /// Version to show first (falls back to the first listed version when unknown)
    #[arg(long = "version", short = 'V', value_name = "VERSION")]
    package_version: Option<String>,

    /// Override the registry API base URL
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

impl Args {
    /// Apply command-line overrides on top of the loaded settings
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(url) = &self.api_url {
            settings.api.base_url = url.clone();
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    color_eyre::install()?;
    conan_core::logging::init()?;

    if args.init_config {
        let Some(path) = config::config_file_path() else {
            return Err(Error::config("No config directory on this platform").into());
        };
        if config::init_config_file(&path)? {
            eprintln!("Created {}", path.display());
        } else {
            eprintln!("Config already exists at {}", path.display());
        }
        return Ok(());
    }

    let Some(package) = args.package.as_deref() else {
        return Err(Error::InvalidPackageId(String::new()).into());
    };
    validate_package_id(package)?;

    let mut settings = config::load_settings();
    args.apply_overrides(&mut settings);
    info!(
        "Registry: {}, confirm delay: {}ms",
        settings.api.base_url, settings.clipboard.confirm_ms
    );

    let version = args.package_version.clone();
    if args.headless {
        conan_center_browser::run_headless(package, version, settings).await?;
    } else {
        conan_center_browser::run_tui(package, version, settings).await?;
    }
    Ok(())
}
