use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use crate::slots::SLOT_COUNT;

use super::state::{App, Focus};

/// Timeout for event polling - keeps the poll loop, countdown display, and
/// notification expiry moving while idle
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)?
            && let Event::Key(key_event) = event::read()?
            // Check that it's a key press event to avoid duplicates
            && key_event.kind == KeyEventKind::Press
        {
            self.handle_key_event(key_event);
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // The slot editor captures everything while open
        if self.editor.is_some() {
            self.handle_editor_key(key);
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        match self.focus {
            Focus::SlotsPane => self.handle_slots_pane_key(key),
            Focus::PreviewPane => self.handle_preview_pane_key(key),
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Esc => self.cancel_edit(),
            _ => {
                if let Some(editor) = self.editor.as_mut() && editor.textarea.input(key) {
                    self.mark_dirty();
                }
            }
        }
    }

    /// Keys that work regardless of pane focus. Returns true when handled.
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.request_quit(),
                KeyCode::Char('s') => self.save_slots(),
                KeyCode::Char('o') => self.load_slots(),
                _ => return false,
            }
            return true;
        }

        match key.code {
            KeyCode::Char('q') => self.request_quit(),
            KeyCode::Char('t') => self.start_typing(),
            KeyCode::Char('s') => self.cancel_typing(),
            KeyCode::Esc => {
                if !self.session.is_active() {
                    return false;
                }
                self.cancel_typing();
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::SlotsPane => Focus::PreviewPane,
                    Focus::PreviewPane => Focus::SlotsPane,
                };
                self.mark_dirty();
            }
            // Direct activation: 1-6 selects and fires that slot
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                debug_assert!(index < SLOT_COUNT);
                self.selected_slot = index;
                self.activate_slot(index);
            }
            KeyCode::Char('[') => self.adjust_start_delay(-1),
            KeyCode::Char(']') => self.adjust_start_delay(1),
            KeyCode::Char('{') => self.adjust_interval(-5),
            KeyCode::Char('}') => self.adjust_interval(5),
            _ => return false,
        }
        true
    }

    fn handle_slots_pane_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous_slot(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next_slot(),
            KeyCode::Enter => self.activate_slot(self.selected_slot),
            KeyCode::Char('e') => self.begin_edit(),
            KeyCode::Char('x') | KeyCode::Delete => self.clear_selected_slot(),
            _ => {}
        }
    }

    fn handle_preview_pane_key(&mut self, key: KeyEvent) {
        // The offset is re-clamped against the real viewport at render time
        let total_lines = self.preview.text().lines().count().max(1) as u16;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.preview.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.preview.scroll_down(1, total_lines, 1),
            KeyCode::PageUp => self.preview.scroll_up(10),
            KeyCode::PageDown => self.preview.scroll_down(10, total_lines, 1),
            _ => return,
        }
        self.mark_dirty();
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
