//! Clipboard write service
//!
//! The terminal front end supplies a [`ClipboardBackend`]; writes run on a
//! blocking thread so a slow backend never stalls the update loop.

use std::sync::Arc;

use conan_core::prelude::*;

/// Synchronous clipboard writer
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardBackend: Send + Sync {
    /// Place `text` on the system clipboard
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Shared handle to the active clipboard backend
pub type SharedClipboard = Arc<dyn ClipboardBackend>;

/// Backend used when no clipboard is reachable (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableClipboard;

impl ClipboardBackend for UnavailableClipboard {
    fn write_text(&self, _text: &str) -> Result<()> {
        Err(Error::clipboard_unavailable("no clipboard in this mode"))
    }
}

/// Write `text` through `backend` on the blocking pool
pub async fn copy_text(backend: SharedClipboard, text: String) -> Result<()> {
    let len = text.len();
    tokio::task::spawn_blocking(move || backend.write_text(&text))
        .await
        .map_err(|e| Error::clipboard_write(format!("Clipboard task failed: {}", e)))??;
    trace!("Copied {} bytes to clipboard", len);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_copy_text_writes_exact_text() {
        let mut backend = MockClipboardBackend::new();
        backend
            .expect_write_text()
            .withf(|text| text == "hello")
            .times(1)
            .returning(|_| Ok(()));

        copy_text(Arc::new(backend), "hello".to_string())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_copy_text_propagates_backend_error() {
        let mut backend = MockClipboardBackend::new();
        backend
            .expect_write_text()
            .returning(|_| Err(Error::clipboard_write("denied")));

        let err = copy_text(Arc::new(backend), "x".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ClipboardWrite { .. }));
    }

    #[tokio::test]
    async fn test_unavailable_clipboard_fails() {
        let err = copy_text(Arc::new(UnavailableClipboard), "x".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ClipboardUnavailable { .. }));
    }
}
