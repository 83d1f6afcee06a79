use crate::config::ClipboardBackend;

use super::{osc52, system};

pub type ClipboardResult = Result<(), ClipboardError>;

#[derive(Debug)]
pub enum ClipboardError {
    SystemUnavailable,
    ReadError,
    WriteError,
}

pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|_| osc52::copy(text)),
    }
}

/// Read the current clipboard text.
///
/// Reads always go through the system clipboard: OSC 52 is write-only, so
/// under that backend reads simply fail and the caller's empty-string
/// degradation applies.
pub fn read_clipboard() -> Result<String, ClipboardError> {
    system::read()
}
