//! Key event handlers for different UI modes

use conan_core::ContentTab;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Loading => handle_key_loading(state, key),
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::VersionPicker => handle_key_version_picker(key),
    }
}

/// Handle key events on the "Loading..." screen
fn handle_key_loading(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        // Retry only after a failure; the first fetch is already running
        InputKey::Char('r') if state.load_error.is_some() => Some(Message::LoadPackage),
        _ => None,
    }
}

/// Handle key events on the package page
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    let on_badges = state.has_tabs() && state.content_tab == ContentTab::Badges;
    let on_use_it = state.has_tabs() && state.content_tab == ContentTab::UseIt;

    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char('v') => Some(Message::OpenVersionPicker),
        InputKey::Enter if on_badges => Some(Message::CopyBadge),
        InputKey::Enter => Some(Message::OpenVersionPicker),

        InputKey::Tab | InputKey::BackTab => Some(Message::ToggleContentTab),

        // Badges tab
        InputKey::Char('c') if on_badges => Some(Message::CopyBadge),
        InputKey::Right | InputKey::Char('l') if on_badges => Some(Message::NextBadgeFormat),
        InputKey::Left | InputKey::Char('h') if on_badges => Some(Message::PrevBadgeFormat),

        // "Use it" tab
        InputKey::Down | InputKey::Char('j') if on_use_it => Some(Message::ScrollUseItDown),
        InputKey::Up | InputKey::Char('k') if on_use_it => Some(Message::ScrollUseItUp),

        _ => None,
    }
}

/// Handle key events in the version picker popup
fn handle_key_version_picker(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::VersionPickerUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::VersionPickerDown),
        InputKey::Enter => Some(Message::ConfirmVersionPicker),
        InputKey::Esc | InputKey::Char('q') => Some(Message::CloseVersionPicker),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
