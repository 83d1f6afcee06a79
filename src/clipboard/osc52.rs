//! OSC 52 clipboard backend
//!
//! Write-only clipboard access via terminal escape sequences, useful for
//! remote sessions (SSH, tmux) where no system clipboard is reachable.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

/// Copy text to clipboard using OSC 52 escape sequence
///
/// Writes the sequence directly to stdout; terminal emulators that support
/// OSC 52 interpret it as a clipboard operation.
pub fn copy(text: &str) -> ClipboardResult {
    let sequence = encode_osc52(text);

    io::stdout()
        .write_all(sequence.as_bytes())
        .map_err(|_| ClipboardError::WriteError)?;

    io::stdout().flush().map_err(|_| ClipboardError::WriteError)
}

/// Encode text for OSC 52 (exposed for testing)
///
/// Format: `\x1b]52;c;{base64}\x07` — OSC 52 introducer, clipboard
/// selection, base64 payload, BEL terminator.
pub fn encode_osc52(text: &str) -> String {
    let encoded = STANDARD.encode(text);
    format!("\x1b]52;c;{}\x07", encoded)
}
