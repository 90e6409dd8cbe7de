//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe characters that work in all terminals
//! - `IconMode::NerdFonts` - rich Nerd Font glyphs (requires Nerd Font installed)

use conan_app::config::IconMode;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Idle label of the copy control
    pub fn copy(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c5}", // nf-fa-copy
            IconMode::Unicode => "\u{29c9}",   // ⧉
        }
    }

    pub fn package(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f487}", // nf-oct-package
            IconMode::Unicode => "\u{25a3}",   // ▣
        }
    }

    pub fn dropdown(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0d7}", // nf-fa-caret_down
            IconMode::Unicode => "\u{25be}",   // ▾
        }
    }

    pub fn license(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f24e}", // nf-fa-balance_scale
            IconMode::Unicode => "\u{2696}",   // ⚖
        }
    }

    pub fn download(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f019}", // nf-fa-download
            IconMode::Unicode => "\u{2193}",   // ↓
        }
    }

    pub fn link(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c1}", // nf-fa-link
            IconMode::Unicode => "\u{2197}",   // ↗
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn selected(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }
}
