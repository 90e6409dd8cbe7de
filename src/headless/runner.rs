//! Headless mode runner - drives the engine until the page is resolved

use std::sync::Arc;

use conan_app::config::Settings;
use conan_app::services::RegistryApi;
use conan_app::{Engine, UnavailableClipboard};
use conan_core::prelude::*;

use super::HeadlessEvent;

/// Load `package_id`, print one NDJSON event and return.
///
/// Returns an error (non-zero exit) when the page could not be produced.
pub async fn run_headless(
    package_id: &str,
    requested_version: Option<String>,
    settings: Settings,
) -> Result<()> {
    info!("Starting in HEADLESS mode for {}", package_id);

    let mut engine = match Engine::new(
        package_id,
        requested_version,
        settings,
        Arc::new(UnavailableClipboard),
    ) {
        Ok(engine) => engine,
        Err(e) => {
            HeadlessEvent::from_error(&e).emit();
            return Err(e);
        }
    };

    let event = load_page(&mut engine).await;
    engine.shutdown();
    event.emit();

    match event {
        HeadlessEvent::Error { message, .. } => Err(Error::registry(message)),
        HeadlessEvent::PackageLoaded { .. } => {
            info!("Headless mode exiting");
            Ok(())
        }
    }
}

/// Start the fetch and process messages until the page or an error exists
async fn load_page<R>(engine: &mut Engine<R>) -> HeadlessEvent
where
    R: RegistryApi + Send + Sync + 'static,
{
    engine.start();

    loop {
        if let Some(page) = engine.state.page_view() {
            let versions = engine
                .state
                .catalog
                .as_ref()
                .map(|c| c.version_keys().map(str::to_string).collect())
                .unwrap_or_default();
            return HeadlessEvent::package_loaded(&engine.state.package_id, page, versions);
        }

        if let Some(error) = &engine.state.load_error {
            return HeadlessEvent::error(error.clone(), engine.state.load_error_fatal);
        }

        if engine.should_quit() {
            warn!("Quit requested before the package loaded");
            return HeadlessEvent::error("Interrupted", false);
        }

        if !engine.process_next().await {
            return HeadlessEvent::from_error(&Error::ChannelClosed);
        }
    }
}
