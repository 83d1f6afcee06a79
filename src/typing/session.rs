//! Session parameters and worker progress events

use std::ops::RangeInclusive;
use std::time::Duration;

pub const DEFAULT_START_DELAY_SECS: u64 = 3;
pub const DEFAULT_INTERVAL_UNITS: u64 = 50;

/// Start-delay control bounds, in whole seconds.
pub const START_DELAY_RANGE: RangeInclusive<u64> = 1..=100;
/// Keystroke-interval control bounds. One unit is 1/10000 of a second, so
/// the usable pause spans 0.1 ms to 20 ms.
pub const INTERVAL_UNITS_RANGE: RangeInclusive<u64> = 1..=200;

/// Timing inputs captured once at session start. A session's behavior is a
/// pure function of these; mid-session control changes apply to the next
/// session only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionParams {
    pub start_delay_secs: u64,
    pub interval_units: u64,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            start_delay_secs: DEFAULT_START_DELAY_SECS,
            interval_units: DEFAULT_INTERVAL_UNITS,
        }
    }
}

impl SessionParams {
    pub fn new(start_delay_secs: u64, interval_units: u64) -> Self {
        Self {
            start_delay_secs: start_delay_secs
                .clamp(*START_DELAY_RANGE.start(), *START_DELAY_RANGE.end()),
            interval_units: interval_units
                .clamp(*INTERVAL_UNITS_RANGE.start(), *INTERVAL_UNITS_RANGE.end()),
        }
    }

    /// Pause between characters: `interval_units / 10000` seconds.
    pub fn keystroke_interval(&self) -> Duration {
        Duration::from_micros(self.interval_units * 100)
    }
}

/// Progress reports dispatched from the worker to the UI loop, observed in
/// send order (FIFO).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypingEvent {
    /// One countdown tick; `remaining_secs` counts down to 1.
    CountdownTick { remaining_secs: u64 },
    /// Countdown done; `text` is the filtered snapshot about to be emitted.
    Started { text: String },
    /// About to emit the character at `index` of the session text.
    Progress { index: usize },
    /// The session is over; the worker exits after sending this.
    Finished { outcome: SessionOutcome },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every character of the session text was emitted.
    Completed,
    /// Cancellation observed at a checkpoint; remaining characters were
    /// never emitted.
    Cancelled,
    /// The clipboard snapshot was empty; nothing to do.
    NothingToType,
    /// The keystroke emitter could not be created or gave out mid-session.
    Failed(String),
}
