//! ConanCenter package browser
//!
//! Library half of the `ccbrowse` binary: the headless JSON runner and the
//! entry point that hands off to the terminal UI.

pub mod headless;

use conan_app::config::Settings;
use conan_core::prelude::*;

pub use headless::run_headless;

/// Run the terminal UI for `package_id`
pub async fn run_tui(
    package_id: &str,
    requested_version: Option<String>,
    settings: Settings,
) -> Result<()> {
    info!("Opening package page for {}", package_id);

    let result = conan_tui::run(package_id, requested_version, settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("ConanCenter browser exiting");
    result
}
