//! Synthetic keystroke emission
//!
//! Characters go to whatever window currently holds OS input focus; there is
//! no target-window validation.

use enigo::{Enigo, Keyboard, Settings};

/// One-character-at-a-time keystroke sink.
pub trait KeyEmitter {
    fn emit_char(&mut self, ch: char) -> Result<(), String>;
}

/// Production emitter backed by enigo.
pub struct EnigoEmitter {
    enigo: Enigo,
}

impl EnigoEmitter {
    pub fn new() -> Result<Self, String> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| format!("Failed to init keystroke emitter: {}", e))?;
        Ok(Self { enigo })
    }
}

impl KeyEmitter for EnigoEmitter {
    fn emit_char(&mut self, ch: char) -> Result<(), String> {
        let mut buf = [0u8; 4];
        self.enigo
            .text(ch.encode_utf8(&mut buf))
            .map_err(|e| format!("Failed to emit keystroke: {}", e))
    }
}
