//! Session ownership
//!
//! A single manager owns at most one live typing session: its cancellation
//! token, its event receiver, and the UI-facing phase. Start requests while
//! a session is active are ignored, so two workers can never race on one
//! cancellation flag.

use std::sync::mpsc::{self, Receiver, TryRecvError};

use tokio_util::sync::CancellationToken;

use crate::config::ClipboardBackend;

use super::session::{SessionOutcome, SessionParams, TypingEvent};
use super::worker;

/// UI-facing phase of the active session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    CountingDown { remaining_secs: u64 },
    Typing,
}

struct ActiveSession {
    cancel: CancellationToken,
    events: Receiver<TypingEvent>,
    phase: SessionPhase,
}

#[derive(Default)]
pub struct SessionManager {
    active: Option<ActiveSession>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn phase(&self) -> Option<SessionPhase> {
        self.active.as_ref().map(|s| s.phase)
    }

    /// Start a session against the OS clipboard and keyboard.
    ///
    /// Idempotent while a session is active: the request is ignored and
    /// `false` is returned.
    pub fn start(&mut self, params: SessionParams, backend: ClipboardBackend) -> bool {
        if self.active.is_some() {
            #[cfg(debug_assertions)]
            log::debug!("Ignoring start request: session already active");
            return false;
        }

        let cancel = CancellationToken::new();
        let (tx, rx) = mpsc::channel();
        // The worker outlives interest in it on quit; it is detached and
        // reaped via its Finished event, not joined.
        let _ = worker::spawn_session(params, backend, tx, cancel.clone());
        self.attach(params, cancel, rx);
        true
    }

    /// Wire up an already-spawned session. Split from [`start`] so tests
    /// can feed the event channel directly.
    pub(crate) fn attach(
        &mut self,
        params: SessionParams,
        cancel: CancellationToken,
        events: Receiver<TypingEvent>,
    ) {
        self.active = Some(ActiveSession {
            cancel,
            events,
            phase: SessionPhase::CountingDown {
                remaining_secs: params.start_delay_secs,
            },
        });
    }

    /// Request cooperative cancellation; observed by the worker before its
    /// next tick or character.
    pub fn request_cancel(&self) {
        if let Some(session) = &self.active {
            session.cancel.cancel();
        }
    }

    /// Drain pending worker events in dispatch order, tracking the phase.
    /// The session is reaped when its Finished event arrives.
    pub fn drain_events(&mut self) -> Vec<TypingEvent> {
        let Some(session) = self.active.as_mut() else {
            return Vec::new();
        };

        let mut events = Vec::new();
        let mut finished = false;
        loop {
            match session.events.try_recv() {
                Ok(event) => {
                    match &event {
                        TypingEvent::CountdownTick { remaining_secs } => {
                            session.phase = SessionPhase::CountingDown {
                                remaining_secs: *remaining_secs,
                            };
                        }
                        TypingEvent::Started { .. } | TypingEvent::Progress { .. } => {
                            session.phase = SessionPhase::Typing;
                        }
                        TypingEvent::Finished { .. } => finished = true,
                    }
                    events.push(event);
                    if finished {
                        break;
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    // Worker died without reporting; treat as a failure.
                    events.push(TypingEvent::Finished {
                        outcome: SessionOutcome::Failed("typing worker disappeared".to_string()),
                    });
                    finished = true;
                    break;
                }
            }
        }

        if finished {
            self.active = None;
        }
        events
    }
}

impl Drop for SessionManager {
    fn drop(&mut self) {
        self.request_cancel();
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod manager_tests;
