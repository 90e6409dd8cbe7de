//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel and the action context
//! (registry client, clipboard backend, copy reset timers). Both front ends
//! drive it the same way: `start()`, then feed it messages until
//! `should_quit()`.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::actions::ActionContext;
use crate::clipboard::SharedClipboard;
use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::services::{HttpRegistryClient, RegistryApi};
use crate::signals;
use crate::state::AppState;
use conan_core::prelude::*;

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for the package browser.
pub struct Engine<R = HttpRegistryClient> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    actions: ActionContext<R>,

    signal_task: Option<JoinHandle<()>>,
}

impl Engine<HttpRegistryClient> {
    /// Create an engine talking to the registry configured in `settings`.
    pub fn new(
        package_id: impl Into<String>,
        requested_version: Option<String>,
        settings: Settings,
        clipboard: SharedClipboard,
    ) -> Result<Self> {
        let registry = HttpRegistryClient::new(&settings.api)?;
        info!("Using registry at {}", registry.base_url());
        Ok(Self::with_registry(
            package_id,
            requested_version,
            settings,
            registry,
            clipboard,
        ))
    }
}

impl<R> Engine<R>
where
    R: RegistryApi + Send + Sync + 'static,
{
    /// Create an engine over any registry implementation.
    ///
    /// Must be called inside a tokio runtime; spawns the signal handler.
    pub fn with_registry(
        package_id: impl Into<String>,
        requested_version: Option<String>,
        settings: Settings,
        registry: R,
        clipboard: SharedClipboard,
    ) -> Self {
        let state = AppState::new(package_id, requested_version, settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
        let signal_task = Some(signals::spawn_signal_handler(msg_tx.clone()));
        let actions = ActionContext::new(msg_tx.clone(), Arc::new(registry), clipboard);

        Self {
            state,
            msg_tx,
            msg_rx,
            actions,
            signal_task,
        }
    }

    /// Kick off the initial package fetch
    pub fn start(&mut self) {
        self.process_message(Message::LoadPackage);
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &mut self.actions);
    }

    /// Process every message currently queued. Returns how many were handled.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns `false` when the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Stop timers and the signal handler
    pub fn shutdown(&mut self) {
        self.stop_background_tasks();
        debug!("Engine shut down");
    }
}

impl<R> Engine<R> {
    fn stop_background_tasks(&mut self) {
        self.actions.reset_timers.abort_all();
        if let Some(task) = self.signal_task.take() {
            task.abort();
        }
    }
}

impl<R> Drop for Engine<R> {
    fn drop(&mut self) {
        self.stop_background_tasks();
    }
}
