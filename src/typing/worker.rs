//! Typing worker thread
//!
//! Runs one session from countdown through emission. The only blocking
//! sleeps in the program happen here, never on the UI thread. Cancellation
//! is cooperative: the token is checked before each countdown tick and
//! before each character; a keystroke already in flight is not recalled.

use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::config::ClipboardBackend;

use super::filter::filter_typeable;
use super::keyboard::{EnigoEmitter, KeyEmitter};
use super::session::{SessionOutcome, SessionParams, TypingEvent};

const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

/// Spawn a session worker against the OS clipboard and keyboard.
///
/// The emitter is constructed on the worker thread; if that fails the
/// session ends immediately with a `Failed` outcome and no keystrokes.
pub fn spawn_session(
    params: SessionParams,
    backend: ClipboardBackend,
    events: Sender<TypingEvent>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut clipboard = SystemClipboard::new(backend);
        match EnigoEmitter::new() {
            Ok(mut emitter) => {
                run_session(params, &mut clipboard, &mut emitter, &events, &cancel);
            }
            Err(reason) => {
                #[cfg(debug_assertions)]
                log::error!("Typing session unavailable: {}", reason);
                let _ = events.send(TypingEvent::Finished {
                    outcome: SessionOutcome::Failed(reason),
                });
            }
        }
    })
}

/// One full session: countdown, snapshot, filter, emit.
///
/// Separated from [`spawn_session`] so tests can drive it synchronously
/// with fake clipboard and emitter implementations.
pub fn run_session(
    params: SessionParams,
    clipboard: &mut dyn Clipboard,
    emitter: &mut dyn KeyEmitter,
    events: &Sender<TypingEvent>,
    cancel: &CancellationToken,
) {
    for remaining_secs in (1..=params.start_delay_secs).rev() {
        if cancel.is_cancelled() {
            let _ = events.send(TypingEvent::Finished {
                outcome: SessionOutcome::Cancelled,
            });
            return;
        }
        let _ = events.send(TypingEvent::CountdownTick { remaining_secs });
        thread::sleep(COUNTDOWN_TICK);
    }

    // Snapshot once; the session text is immutable from here on and never
    // feeds back into the clipboard or the slots.
    let snapshot = clipboard.read();
    if snapshot.is_empty() {
        let _ = events.send(TypingEvent::Finished {
            outcome: SessionOutcome::NothingToType,
        });
        return;
    }

    let text = filter_typeable(&snapshot);
    let _ = events.send(TypingEvent::Started { text: text.clone() });

    let interval = params.keystroke_interval();
    for (index, ch) in text.chars().enumerate() {
        if cancel.is_cancelled() {
            let _ = events.send(TypingEvent::Finished {
                outcome: SessionOutcome::Cancelled,
            });
            return;
        }
        let _ = events.send(TypingEvent::Progress { index });
        if let Err(reason) = emitter.emit_char(ch) {
            #[cfg(debug_assertions)]
            log::error!("Keystroke emission failed at index {}: {}", index, reason);
            let _ = events.send(TypingEvent::Finished {
                outcome: SessionOutcome::Failed(reason),
            });
            return;
        }
        thread::sleep(interval);
    }

    let _ = events.send(TypingEvent::Finished {
        outcome: SessionOutcome::Completed,
    });
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
