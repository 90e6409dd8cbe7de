//! Action handlers: UpdateAction dispatch and background task spawning

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use conan_core::prelude::*;
use conan_core::BadgeFormat;

use crate::clipboard::{copy_text, SharedClipboard};
use crate::message::Message;
use crate::services::{load_catalog, RegistryApi};
use crate::UpdateAction;

/// Live reset timer of each copy control
#[derive(Debug, Default)]
pub struct CopyResetTimers {
    timers: HashMap<BadgeFormat, JoinHandle<()>>,
}

impl CopyResetTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer of `format`, aborting the one already pending
    pub fn schedule(
        &mut self,
        format: BadgeFormat,
        generation: u64,
        delay: Duration,
        msg_tx: mpsc::Sender<Message>,
    ) {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = msg_tx
                .send(Message::CopyFeedbackExpired { format, generation })
                .await;
        });

        if let Some(previous) = self.timers.insert(format, handle) {
            previous.abort();
        }
    }

    /// Number of timers that have not fired yet
    pub fn pending(&self) -> usize {
        self.timers.values().filter(|h| !h.is_finished()).count()
    }

    pub fn abort_all(&mut self) {
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
    }
}

/// Everything background tasks need from the engine
pub struct ActionContext<R> {
    pub msg_tx: mpsc::Sender<Message>,
    pub registry: Arc<R>,
    pub clipboard: SharedClipboard,
    pub reset_timers: CopyResetTimers,
}

impl<R> ActionContext<R> {
    pub fn new(msg_tx: mpsc::Sender<Message>, registry: Arc<R>, clipboard: SharedClipboard) -> Self {
        Self {
            msg_tx,
            registry,
            clipboard,
            reset_timers: CopyResetTimers::new(),
        }
    }
}

/// Execute an action by spawning a background task
pub fn handle_action<R>(action: UpdateAction, ctx: &mut ActionContext<R>)
where
    R: RegistryApi + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchPackage { package_id } => {
            let registry = ctx.registry.clone();
            let msg_tx = ctx.msg_tx.clone();
            tokio::spawn(async move {
                let msg = match load_catalog(registry.as_ref(), &package_id).await {
                    Ok(catalog) => Message::PackageLoaded(Box::new(catalog)),
                    Err(e) => Message::PackageLoadFailed {
                        error: e.to_string(),
                        fatal: e.is_fatal(),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::WriteClipboard { format, text } => {
            let clipboard = ctx.clipboard.clone();
            let msg_tx = ctx.msg_tx.clone();
            tokio::spawn(async move {
                let msg = match copy_text(clipboard, text).await {
                    Ok(()) => Message::ClipboardWritten { format },
                    Err(e) => Message::ClipboardWriteFailed {
                        format,
                        error: e.to_string(),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::ScheduleCopyReset {
            format,
            generation,
            delay,
        } => {
            trace!(
                "Copy reset for {} in {:?} (generation {})",
                format,
                delay,
                generation
            );
            ctx.reset_timers
                .schedule(format, generation, delay, ctx.msg_tx.clone());
        }
    }
}
