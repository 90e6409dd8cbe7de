//! conan-tui - Terminal UI for the ConanCenter package browser
//!
//! Creates an Engine from conan-app with an OSC 52 clipboard and renders the
//! package page with ratatui.

pub mod clipboard;
pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use clipboard::{Osc52Clipboard, Passthrough};
pub use runner::run;
