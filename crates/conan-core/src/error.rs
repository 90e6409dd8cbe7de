//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Registry Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Registry request failed: {message}")]
    Registry { message: String },

    #[error("Registry returned HTTP {status} for {url}")]
    RegistryStatus { status: u16, url: String },

    #[error("Package '{package_id}' has no versions")]
    EmptyPackage { package_id: String },

    #[error("Invalid package identifier: {0:?}")]
    InvalidPackageId(String),

    // ─────────────────────────────────────────────────────────────
    // Clipboard Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Clipboard unavailable: {message}")]
    ClipboardUnavailable { message: String },

    #[error("Clipboard write failed: {message}")]
    ClipboardWrite { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn registry(message: impl Into<String>) -> Self {
        Self::Registry {
            message: message.into(),
        }
    }

    pub fn registry_status(status: u16, url: impl Into<String>) -> Self {
        Self::RegistryStatus {
            status,
            url: url.into(),
        }
    }

    pub fn empty_package(package_id: impl Into<String>) -> Self {
        Self::EmptyPackage {
            package_id: package_id.into(),
        }
    }

    pub fn clipboard_unavailable(message: impl Into<String>) -> Self {
        Self::ClipboardUnavailable {
            message: message.into(),
        }
    }

    pub fn clipboard_write(message: impl Into<String>) -> Self {
        Self::ClipboardWrite {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if retrying cannot help and the application should exit.
    ///
    /// A 4xx answer other than 408 and 429 means the package itself is
    /// unavailable, so a retry would get the same answer.
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::RegistryStatus { status, .. } => {
                (400..500).contains(status) && *status != 408 && *status != 429
            }
            Error::TerminalInit(_)
            | Error::InvalidPackageId(_)
            | Error::EmptyPackage { .. }
            | Error::Config { .. }
            | Error::ChannelClosed => true,
            _ => false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
