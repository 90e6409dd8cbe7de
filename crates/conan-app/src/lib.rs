//! conan-app - Application state and orchestration for the ConanCenter package browser
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! the Engine abstraction shared by the TUI and headless runners, configuration
//! loading, the registry service, and the clipboard copy-feedback machinery.

pub mod actions;
pub mod clipboard;
pub mod config;
pub mod copy_feedback;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod services;
pub mod signals;
pub mod state;

// Re-export primary types
pub use clipboard::{ClipboardBackend, SharedClipboard, UnavailableClipboard};
pub use copy_feedback::{CopyFeedback, CopyFeedbackSet};
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, UiMode, VersionPickerState};
