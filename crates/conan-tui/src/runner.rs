//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use conan_app::config::Settings;
use conan_app::Engine;
use conan_core::prelude::*;

use crate::clipboard::Osc52Clipboard;
use crate::{event, render, terminal};

/// Run the package page for `package_id` until the user quits
pub async fn run(
    package_id: &str,
    requested_version: Option<String>,
    settings: Settings,
) -> Result<()> {
    let clipboard = Arc::new(Osc52Clipboard::detect());
    let mut engine = Engine::new(package_id, requested_version, settings, clipboard)?;

    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    engine.start();
    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    if let Err(e) = &result {
        error!("TUI loop failed: {}", e);
    }
    result
}

/// Main event loop: drain background messages, draw, poll input
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        engine.drain_pending_messages();
        if engine.should_quit() {
            break;
        }

        terminal
            .draw(|frame| render::view(frame, &engine.state))
            .context("Failed to draw frame")?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("Quitting");
    Ok(())
}
