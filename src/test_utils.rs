//! Shared test utilities for cliptyper

#[cfg(test)]
pub mod test_helpers {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tempfile::TempDir;

    use crate::app::App;
    use crate::clipboard::MemoryClipboard;
    use crate::config::Config;

    /// App wired to an in-memory clipboard and a slots file inside a temp
    /// directory. Keep the returned TempDir alive for the test's duration.
    pub fn test_app(clipboard_text: &str) -> (App, TempDir) {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.slots.path = Some(dir.path().join("slots.json"));

        let clipboard = Box::new(MemoryClipboard::with_contents(clipboard_text));
        (App::with_clipboard(clipboard, &config), dir)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
