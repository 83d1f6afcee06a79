// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::typing::{
    DEFAULT_INTERVAL_UNITS, DEFAULT_START_DELAY_SECS, INTERVAL_UNITS_RANGE, START_DELAY_RANGE,
};

/// Clipboard copy backend selection
///
/// Reads are always system-backed; OSC 52 is a write-only escape-sequence
/// path for terminals where no system clipboard is reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Typing configuration section
///
/// These seed the in-app controls; the controls themselves are never
/// persisted back.
#[derive(Debug, Clone, Deserialize)]
pub struct TypingConfig {
    #[serde(default = "default_start_delay")]
    pub start_delay_secs: u64,
    #[serde(default = "default_interval_units")]
    pub keystroke_interval: u64,
}

fn default_start_delay() -> u64 {
    DEFAULT_START_DELAY_SECS
}

fn default_interval_units() -> u64 {
    DEFAULT_INTERVAL_UNITS
}

impl Default for TypingConfig {
    fn default() -> Self {
        TypingConfig {
            start_delay_secs: DEFAULT_START_DELAY_SECS,
            keystroke_interval: DEFAULT_INTERVAL_UNITS,
        }
    }
}

impl TypingConfig {
    /// Clamp out-of-range values to the control bounds instead of rejecting
    /// the whole config file over a bad slider seed.
    pub fn clamped(&self) -> Self {
        TypingConfig {
            start_delay_secs: self
                .start_delay_secs
                .clamp(*START_DELAY_RANGE.start(), *START_DELAY_RANGE.end()),
            keystroke_interval: self
                .keystroke_interval
                .clamp(*INTERVAL_UNITS_RANGE.start(), *INTERVAL_UNITS_RANGE.end()),
        }
    }
}

/// Slots configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlotsConfig {
    /// Override for the slots file location
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub typing: TypingConfig,
    #[serde(default)]
    pub slots: SlotsConfig,
}
