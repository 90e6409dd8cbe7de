//! Message types for the application (TEA pattern)

use conan_core::{BadgeFormat, PackageCatalog};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Package Loading
    // ─────────────────────────────────────────────────────────
    /// Fetch the package documents (initial load or retry after failure)
    LoadPackage,
    /// Both documents fetched and merged
    PackageLoaded(Box<PackageCatalog>),
    /// Fetch or merge failed; `fatal` when a retry cannot succeed
    PackageLoadFailed { error: String, fatal: bool },

    // ─────────────────────────────────────────────────────────
    // Version Picker
    // ─────────────────────────────────────────────────────────
    OpenVersionPicker,
    CloseVersionPicker,
    VersionPickerUp,
    VersionPickerDown,
    /// Select the highlighted version and close the picker
    ConfirmVersionPicker,
    /// Replace the selected version
    SelectVersion { version: String },

    // ─────────────────────────────────────────────────────────
    // Page Navigation
    // ─────────────────────────────────────────────────────────
    /// Switch between "Use it" and "Badges"
    ToggleContentTab,
    NextBadgeFormat,
    PrevBadgeFormat,
    ScrollUseItUp,
    ScrollUseItDown,

    // ─────────────────────────────────────────────────────────
    // Clipboard
    // ─────────────────────────────────────────────────────────
    /// Copy the active badge snippet
    CopyBadge,
    /// Clipboard write finished
    ClipboardWritten { format: BadgeFormat },
    /// Clipboard write failed
    ClipboardWriteFailed { format: BadgeFormat, error: String },
    /// Reset timer of a copy control fired
    CopyFeedbackExpired { format: BadgeFormat, generation: u64 },
}
