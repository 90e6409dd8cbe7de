//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's TestBackend so widget and full-screen tests can render
//! and assert on buffer text without a real terminal.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

use conan_app::config::Settings;
use conan_app::{AppState, Message};
use conan_core::{parse_downloads, parse_package_info, PackageCatalog};

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 100;
pub const TEST_HEIGHT: u16 = 40;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a test terminal with standard dimensions (100x40)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. with `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere (row by row)
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Index of the first row containing `text`
    pub fn find_line(&self, text: &str) -> Option<u16> {
        let buffer = self.buffer();
        (0..buffer.area.height).find(|&y| get_line_content(buffer, y).contains(text))
    }

    /// All content as a string, one row per line
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// Catalog with a described version (1.3.1) and a bare one (1.2.13)
pub fn test_catalog() -> PackageCatalog {
    let info = parse_package_info(
        r#"{
            "1.3.1": {
                "name": "zlib",
                "info": {
                    "description": "A Massively Spiffy Yet Delicately Unobtrusive Compression Library",
                    "licenses": ["Zlib"],
                    "downloads": 12345,
                    "labels": ["compression"],
                    "use_it": {"requires": ["zlib/1.3.1"]}
                }
            },
            "1.2.13": {"name": "zlib", "info": {"licenses": ["Zlib"]}}
        }"#,
    )
    .expect("valid package info");
    let downloads = parse_downloads(
        r#"{"1.3.1": {"downloads": [
            {"date": "2024-01-01", "downloads": 100},
            {"date": "2024-02-01", "downloads": 400},
            {"date": "2024-03-01", "downloads": 250}
        ]}}"#,
    )
    .expect("valid downloads");
    PackageCatalog::merge("zlib", info, downloads).expect("catalog merges")
}

/// AppState still waiting for its catalog
pub fn create_loading_state() -> AppState {
    AppState::new("zlib", None, Settings::default())
}

/// AppState with `test_catalog()` applied
pub fn create_ready_state() -> AppState {
    let mut state = create_loading_state();
    conan_app::handler::update(&mut state, Message::PackageLoaded(Box::new(test_catalog())));
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_contains() {
        use ratatui::widgets::Paragraph;

        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
        assert_eq!(term.find_line("Hello"), Some(0));
    }

    #[test]
    fn test_ready_state_has_page() {
        let state = create_ready_state();
        assert_eq!(state.selected_version(), Some("1.3.1"));
        assert!(state.page_view().is_some());
    }
}
