//! Typing engine
//!
//! A cancellable worker thread that waits out a per-second countdown, snapshots
//! the clipboard once, filters it down to typeable characters, and emits it one
//! keystroke at a time into whatever window holds OS keyboard focus. Progress
//! flows back to the UI as FIFO events; the worker never touches render state.

mod filter;
mod keyboard;
mod manager;
mod session;
mod worker;

pub use filter::filter_typeable;
pub use keyboard::{EnigoEmitter, KeyEmitter};
pub use manager::{SessionManager, SessionPhase};
pub use session::{
    DEFAULT_INTERVAL_UNITS, DEFAULT_START_DELAY_SECS, INTERVAL_UNITS_RANGE, START_DELAY_RANGE,
    SessionOutcome, SessionParams, TypingEvent,
};
pub use worker::run_session;
