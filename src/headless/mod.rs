//! Headless mode - JSON event output instead of the TUI
//!
//! Fetches the package, resolves the version and prints the derived page as
//! NDJSON (newline-delimited JSON), one event per line, each tagged with an
//! "event" field.
//!
//! # Example Output
//!
//! ```json
//! {"event":"package_loaded","package_id":"zlib","version":"1.3.1","versions":["1.3.1","1.2.13"],"page":{...},"badges":{...},"timestamp":1704700001000}
//! {"event":"error","message":"Registry returned HTTP 404 for ...","fatal":true,"timestamp":1704700001000}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use conan_core::{BadgesView, PageView};

pub use runner::run_headless;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Catalog loaded and a version resolved
    PackageLoaded {
        package_id: String,
        version: String,
        /// Every version in catalog order
        versions: Vec<String>,
        page: Box<PageView>,
        /// Badge image URL and the four snippets, present for every version
        badges: BadgesView,
        timestamp: i64,
    },

    /// Loading failed or was interrupted
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json).and_then(|()| stdout.flush()) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn package_loaded(package_id: &str, page: PageView, versions: Vec<String>) -> Self {
        Self::PackageLoaded {
            package_id: package_id.to_string(),
            version: page.version.clone(),
            versions,
            page: Box::new(page),
            badges: BadgesView::new(package_id),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Error event classified by [`conan_core::Error::is_fatal`]
    pub fn from_error(error: &conan_core::Error) -> Self {
        Self::error(error.to_string(), error.is_fatal())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, HeadlessEvent::Error { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conan_core::{DefaultDescription, PageBody};

    fn fallback_page() -> PageView {
        PageView {
            name: "zlib".to_string(),
            version: "1.2.13".to_string(),
            description: None,
            license_line: Some("Zlib".to_string()),
            downloads_line: None,
            recipe_url: None,
            labels: Vec::new(),
            chart: None,
            body: PageBody::Fallback(DefaultDescription::new("zlib")),
        }
    }

    #[test]
    fn test_package_loaded_serialization() {
        let event = HeadlessEvent::package_loaded(
            "zlib",
            fallback_page(),
            vec!["1.3.1".to_string(), "1.2.13".to_string()],
        );
        let value = serde_json::to_value(&event).expect("serialization failed");

        assert_eq!(value["event"], "package_loaded");
        assert_eq!(value["package_id"], "zlib");
        assert_eq!(value["version"], "1.2.13");
        assert_eq!(value["versions"][1], "1.2.13");
        assert_eq!(value["page"]["license_line"], "Zlib");
        assert_eq!(value["page"]["body"]["kind"], "fallback");
        assert_eq!(
            value["badges"]["image_url"],
            "https://img.shields.io/conan/v/zlib"
        );
        assert_eq!(value["badges"]["snippets"].as_array().map(Vec::len), Some(4));
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_error_serialization() {
        let event = HeadlessEvent::error("HTTP 404", true);
        let value = serde_json::to_value(&event).expect("serialization failed");

        assert_eq!(value["event"], "error");
        assert_eq!(value["message"], "HTTP 404");
        assert_eq!(value["fatal"], true);
        assert!(event.is_error());
    }

    #[test]
    fn test_from_error_carries_fatality() {
        let timeout = HeadlessEvent::from_error(&conan_core::Error::registry("timed out"));
        let closed = HeadlessEvent::from_error(&conan_core::Error::ChannelClosed);

        assert!(matches!(timeout, HeadlessEvent::Error { fatal: false, .. }));
        assert!(matches!(closed, HeadlessEvent::Error { fatal: true, .. }));
    }
}
