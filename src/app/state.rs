use std::path::PathBuf;

use tui_textarea::{CursorMove, TextArea};

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::config::{ClipboardBackend, Config, slots_path};
use crate::notification::NotificationState;
use crate::slots::{self, SlotActivation, SlotStore};
use crate::typing::{
    INTERVAL_UNITS_RANGE, START_DELAY_RANGE, SessionManager, SessionOutcome, SessionParams,
    TypingEvent,
};

use super::preview::PreviewState;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SlotsPane,
    PreviewPane,
}

/// In-progress edit of one slot's text
pub struct SlotEditor {
    pub index: usize,
    pub textarea: TextArea<'static>,
}

/// Values of the two timing controls. Read once at session start, never
/// persisted.
#[derive(Debug, Clone, Copy)]
pub struct ControlsState {
    pub start_delay_secs: u64,
    pub interval_units: u64,
}

impl ControlsState {
    pub fn session_params(&self) -> SessionParams {
        SessionParams::new(self.start_delay_secs, self.interval_units)
    }
}

/// Application state
pub struct App {
    pub slots: SlotStore,
    pub clipboard: Box<dyn Clipboard>,
    pub clipboard_backend: ClipboardBackend,
    pub preview: PreviewState,
    pub session: SessionManager,
    pub focus: Focus,
    pub selected_slot: usize,
    pub editor: Option<SlotEditor>,
    pub controls: ControlsState,
    pub slots_file: PathBuf,
    pub notification: NotificationState,
    should_quit: bool,
    quit_after_session: bool,
    dirty: bool,
}

impl App {
    /// Create a new App against the OS clipboard
    pub fn new(config: &Config) -> Self {
        Self::with_clipboard(
            Box::new(SystemClipboard::new(config.clipboard.backend)),
            config,
        )
    }

    /// Create a new App with an injected clipboard (used by tests)
    pub fn with_clipboard(clipboard: Box<dyn Clipboard>, config: &Config) -> Self {
        let typing = config.typing.clamped();
        Self {
            slots: SlotStore::new(),
            clipboard,
            clipboard_backend: config.clipboard.backend,
            preview: PreviewState::new(),
            session: SessionManager::new(),
            focus: Focus::SlotsPane,
            selected_slot: 0,
            editor: None,
            controls: ControlsState {
                start_delay_secs: typing.start_delay_secs,
                interval_units: typing.keystroke_interval,
            },
            slots_file: slots_path(config),
            notification: NotificationState::new(),
            should_quit: false,
            quit_after_session: false,
            dirty: true,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_render(&self) -> bool {
        // Visible notifications re-render on a timer so expiry can clear them.
        self.dirty || self.notification.current().is_some()
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Per-loop housekeeping: apply worker progress, then run the clipboard
    /// poll unless a session owns the display.
    pub fn tick(&mut self) {
        for event in self.session.drain_events() {
            self.apply_session_event(event);
        }

        if !self.session.is_active() && self.preview.poll(self.clipboard.as_mut()) {
            self.dirty = true;
        }
    }

    fn apply_session_event(&mut self, event: TypingEvent) {
        self.dirty = true;
        match event {
            TypingEvent::CountdownTick { .. } => {}
            TypingEvent::Started { text } => {
                self.preview.show_session_text(text);
            }
            TypingEvent::Progress { index } => {
                self.preview.set_highlight(Some(index));
            }
            TypingEvent::Finished { outcome } => {
                self.preview.set_highlight(None);
                if let SessionOutcome::Failed(reason) = outcome {
                    self.notification
                        .show_warning(&format!("Typing unavailable: {}", reason));
                }
                if self.quit_after_session {
                    self.should_quit = true;
                }
            }
        }
    }

    /// Start a typing session from the current controls. Ignored while a
    /// session is active.
    pub fn start_typing(&mut self) {
        if self
            .session
            .start(self.controls.session_params(), self.clipboard_backend)
        {
            self.dirty = true;
        }
    }

    /// Request cooperative cancellation of the active session, if any.
    pub fn cancel_typing(&mut self) {
        self.session.request_cancel();
    }

    /// Quit, letting an active session wind down first. A second request
    /// forces an immediate exit.
    pub fn request_quit(&mut self) {
        if !self.session.is_active() || self.quit_after_session {
            self.should_quit = true;
            return;
        }
        self.session.request_cancel();
        self.quit_after_session = true;
    }

    pub fn select_previous_slot(&mut self) {
        self.selected_slot = self.selected_slot.saturating_sub(1);
        self.dirty = true;
    }

    pub fn select_next_slot(&mut self) {
        self.selected_slot = (self.selected_slot + 1).min(slots::SLOT_COUNT - 1);
        self.dirty = true;
    }

    /// Run the slot-activation policy for slot `index`.
    pub fn activate_slot(&mut self, index: usize) {
        let result = slots::activate_slot(&mut self.slots, self.clipboard.as_mut(), index);
        match result {
            SlotActivation::Ignored => {}
            SlotActivation::Copied => {
                self.notification
                    .show(&format!("Slot {} copied to clipboard", index + 1));
            }
            SlotActivation::CopiedAndArchived { archived_into } => {
                self.notification.show(&format!(
                    "Slot {} copied, clipboard archived to slot {}",
                    index + 1,
                    archived_into + 1
                ));
            }
        }
        self.dirty = true;
    }

    pub fn begin_edit(&mut self) {
        let index = self.selected_slot;
        let mut textarea = TextArea::from(self.slots.get(index).lines());
        textarea.move_cursor(CursorMove::Bottom);
        textarea.move_cursor(CursorMove::End);
        self.editor = Some(SlotEditor { index, textarea });
        self.dirty = true;
    }

    pub fn commit_edit(&mut self) {
        if let Some(editor) = self.editor.take() {
            let text = editor.textarea.lines().join("\n");
            self.slots.set(editor.index, text);
            self.dirty = true;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editor = None;
        self.dirty = true;
    }

    pub fn clear_selected_slot(&mut self) {
        self.slots.clear(self.selected_slot);
        self.dirty = true;
    }

    pub fn save_slots(&mut self) {
        match slots::save_slots(&self.slots, &self.slots_file) {
            Ok(()) => self
                .notification
                .show(&format!("Slots saved to {}", self.slots_file.display())),
            Err(e) => self.notification.show_error(&format!("Save failed: {}", e)),
        }
        self.dirty = true;
    }

    pub fn load_slots(&mut self) {
        match slots::load_slots(&self.slots_file) {
            Ok(store) => {
                self.slots = store;
                self.notification
                    .show(&format!("Slots loaded from {}", self.slots_file.display()));
            }
            Err(e) => self.notification.show_error(&format!("Load failed: {}", e)),
        }
        self.dirty = true;
    }

    pub fn adjust_start_delay(&mut self, delta: i64) {
        self.controls.start_delay_secs = adjust_in_range(
            self.controls.start_delay_secs,
            delta,
            *START_DELAY_RANGE.start(),
            *START_DELAY_RANGE.end(),
        );
        self.dirty = true;
    }

    pub fn adjust_interval(&mut self, delta: i64) {
        self.controls.interval_units = adjust_in_range(
            self.controls.interval_units,
            delta,
            *INTERVAL_UNITS_RANGE.start(),
            *INTERVAL_UNITS_RANGE.end(),
        );
        self.dirty = true;
    }
}

fn adjust_in_range(value: u64, delta: i64, min: u64, max: u64) -> u64 {
    value.saturating_add_signed(delta).clamp(min, max)
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
