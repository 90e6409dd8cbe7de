//! OSC 52 clipboard backend
//!
//! Writes `ESC ] 52 ; c ; <base64> BEL` to the controlling terminal, which
//! places the text on the system clipboard of the machine running the
//! terminal emulator. Inside tmux or GNU screen the sequence is wrapped in a
//! DCS passthrough so it reaches the outer terminal.

use std::io::{IsTerminal, Write};

use base64::{engine::general_purpose::STANDARD, Engine as _};

use conan_app::ClipboardBackend;
use conan_core::prelude::*;

/// Largest base64 payload most terminals accept
pub const MAX_OSC52_PAYLOAD: usize = 74_994;

/// Multiplexer wrapping applied to the OSC 52 sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Passthrough {
    None,
    /// `ESC P tmux; <seq with ESC doubled> ESC \`
    Tmux,
    /// `ESC P <seq> ESC \`
    Screen,
}

impl Passthrough {
    /// Detect the multiplexer from the environment
    pub fn detect() -> Self {
        Self::from_env(
            std::env::var_os("TMUX").is_some(),
            std::env::var_os("STY").is_some(),
            std::env::var("TERM").ok().as_deref(),
        )
    }

    fn from_env(tmux: bool, sty: bool, term: Option<&str>) -> Self {
        if tmux {
            Passthrough::Tmux
        } else if sty || term.is_some_and(|t| t.starts_with("screen")) {
            Passthrough::Screen
        } else {
            Passthrough::None
        }
    }

    fn wrap(self, seq: &str) -> String {
        match self {
            Passthrough::None => seq.to_string(),
            Passthrough::Tmux => format!("\x1bPtmux;{}\x1b\\", seq.replace('\x1b', "\x1b\x1b")),
            Passthrough::Screen => format!("\x1bP{seq}\x1b\\"),
        }
    }
}

/// Build the escape sequence that copies `text`
pub fn osc52_sequence(text: &str, passthrough: Passthrough) -> Result<String> {
    let payload = STANDARD.encode(text.as_bytes());
    if payload.len() > MAX_OSC52_PAYLOAD {
        return Err(Error::clipboard_write(format!(
            "Payload of {} bytes exceeds the OSC 52 limit of {}",
            payload.len(),
            MAX_OSC52_PAYLOAD
        )));
    }
    Ok(passthrough.wrap(&format!("\x1b]52;c;{payload}\x07")))
}

/// Clipboard backend writing OSC 52 to stdout
#[derive(Debug, Clone, Copy)]
pub struct Osc52Clipboard {
    passthrough: Passthrough,
}

impl Osc52Clipboard {
    pub fn new(passthrough: Passthrough) -> Self {
        Self { passthrough }
    }

    pub fn detect() -> Self {
        let passthrough = Passthrough::detect();
        debug!("OSC 52 clipboard passthrough: {:?}", passthrough);
        Self::new(passthrough)
    }

    /// Write the copy sequence for `text` to `writer`
    pub fn write_to(&self, writer: &mut impl Write, text: &str) -> Result<()> {
        let seq = osc52_sequence(text, self.passthrough)?;
        writer
            .write_all(seq.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| Error::clipboard_write(e.to_string()))
    }
}

impl ClipboardBackend for Osc52Clipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let stdout = std::io::stdout();
        if !stdout.is_terminal() {
            return Err(Error::clipboard_unavailable("stdout is not a terminal"));
        }
        self.write_to(&mut stdout.lock(), text)
    }
}
