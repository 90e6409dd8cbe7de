//! Main update function - handles state transitions (TEA pattern)

use std::time::Duration;

use conan_core::badge_snippet;
use conan_core::prelude::*;

use super::{keys, UpdateAction, UpdateResult};
use crate::message::Message;
use crate::state::{AppPhase, AppState, UiMode};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Package Loading
        // ─────────────────────────────────────────────────────────
        Message::LoadPackage => {
            if state.catalog.is_some() || state.fetch_in_flight {
                return UpdateResult::none();
            }
            state.fetch_in_flight = true;
            state.load_error = None;
            state.load_error_fatal = false;
            info!("Fetching package {}", state.package_id);
            UpdateResult::action(UpdateAction::FetchPackage {
                package_id: state.package_id.clone(),
            })
        }

        Message::PackageLoaded(catalog) => {
            state.fetch_in_flight = false;
            state.apply_catalog(*catalog);
            UpdateResult::none()
        }

        Message::PackageLoadFailed { error, fatal } => {
            state.fetch_in_flight = false;
            error!(
                "Failed to load package {} (fatal: {}): {}",
                state.package_id, fatal, error
            );
            state.load_error = Some(error);
            state.load_error_fatal = fatal;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Version Picker
        // ─────────────────────────────────────────────────────────
        Message::OpenVersionPicker => {
            if state.catalog.is_some() {
                state.version_picker.open_at(state.selected);
                state.ui_mode = UiMode::VersionPicker;
            }
            UpdateResult::none()
        }

        Message::CloseVersionPicker => {
            if state.ui_mode == UiMode::VersionPicker {
                state.ui_mode = UiMode::Normal;
            }
            UpdateResult::none()
        }

        Message::VersionPickerUp => {
            state.version_picker.move_up();
            UpdateResult::none()
        }

        Message::VersionPickerDown => {
            let len = state.version_count();
            state.version_picker.move_down(len);
            UpdateResult::none()
        }

        Message::ConfirmVersionPicker => {
            state.ui_mode = UiMode::Normal;
            let highlighted = state
                .catalog
                .as_ref()
                .and_then(|c| c.get(state.version_picker.highlighted))
                .map(|r| r.version.clone());
            match highlighted {
                Some(version) => UpdateResult::message(Message::SelectVersion { version }),
                None => UpdateResult::none(),
            }
        }

        Message::SelectVersion { version } => {
            state.select_version(&version);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Page Navigation
        // ─────────────────────────────────────────────────────────
        Message::ToggleContentTab => {
            if state.has_tabs() {
                state.content_tab = state.content_tab.toggle();
            }
            UpdateResult::none()
        }

        Message::NextBadgeFormat => {
            state.badge_format = state.badge_format.next();
            UpdateResult::none()
        }

        Message::PrevBadgeFormat => {
            state.badge_format = state.badge_format.prev();
            UpdateResult::none()
        }

        Message::ScrollUseItUp => {
            state.use_it_scroll = state.use_it_scroll.saturating_sub(1);
            UpdateResult::none()
        }

        Message::ScrollUseItDown => {
            let max = state.use_it_line_count().saturating_sub(1);
            let max = u16::try_from(max).unwrap_or(u16::MAX);
            state.use_it_scroll = state.use_it_scroll.saturating_add(1).min(max);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Clipboard
        // ─────────────────────────────────────────────────────────
        Message::CopyBadge => {
            if state.catalog.is_none() {
                return UpdateResult::none();
            }
            let snippet = badge_snippet(&state.package_id, state.badge_format);
            debug!("Copying {} badge snippet", snippet.format);
            UpdateResult::action(UpdateAction::WriteClipboard {
                format: snippet.format,
                text: snippet.text,
            })
        }

        Message::ClipboardWritten { format } => {
            let generation = state.copy_feedback.confirm(format);
            UpdateResult::action(UpdateAction::ScheduleCopyReset {
                format,
                generation,
                delay: Duration::from_millis(state.settings.clipboard.confirm_ms),
            })
        }

        Message::ClipboardWriteFailed { format, error } => {
            warn!("Failed to copy {} badge snippet: {}", format, error);
            UpdateResult::none()
        }

        Message::CopyFeedbackExpired { format, generation } => {
            if !state.copy_feedback.expire(format, generation) {
                trace!(
                    "Ignoring stale copy reset for {} (generation {})",
                    format,
                    generation
                );
            }
            UpdateResult::none()
        }
    }
}
