//! Clipboard preview state
//!
//! A cooperative 1-second poll of the clipboard, plus the single-character
//! highlight driven by the typing engine. While a session is active the
//! caller must not poll: the session snapshot owns the display and the poll
//! would interleave contradictory renders.

use std::time::{Duration, Instant};

use crate::clipboard::Clipboard;

/// Fixed cadence of the clipboard poll.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Default)]
pub struct PreviewState {
    text: String,
    highlight: Option<usize>,
    last_poll: Option<Instant>,
    /// Vertical scroll offset, adjusted by the user or by highlight-follow.
    pub scroll_offset: u16,
}

impl PreviewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the clipboard if the poll is due. Returns true when the poll
    /// ran. Clears any leftover highlight from a finished session.
    pub fn poll(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        let due = self.last_poll.is_none_or(|at| at.elapsed() >= POLL_INTERVAL);
        if !due {
            return false;
        }
        self.last_poll = Some(Instant::now());
        self.text = clipboard.read();
        self.highlight = None;
        true
    }

    /// Replace the display with a typing-session snapshot. The snapshot is
    /// what the engine emits, so the highlight indexes into it directly.
    pub fn show_session_text(&mut self, text: String) {
        self.text = text;
        self.highlight = None;
    }

    /// Mark exactly one character position, or clear all marks with `None`.
    pub fn set_highlight(&mut self, index: Option<usize>) {
        self.highlight = index;
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character count of the displayed text, for the count label.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Line holding the highlighted character, for scroll-into-view.
    pub fn highlight_line(&self) -> Option<usize> {
        let index = self.highlight?;
        let mut line = 0;
        for (i, c) in self.text.chars().enumerate() {
            if i == index {
                return Some(line);
            }
            if c == '\n' {
                line += 1;
            }
        }
        Some(line)
    }

    pub fn scroll_down(&mut self, lines: u16, total_lines: u16, viewport_height: u16) {
        let max_offset = total_lines.saturating_sub(viewport_height);
        self.scroll_offset = self.scroll_offset.saturating_add(lines).min(max_offset);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }
}

#[cfg(test)]
#[path = "preview_tests.rs"]
mod preview_tests;
