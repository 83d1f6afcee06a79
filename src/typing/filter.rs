//! Snapshot filtering
//!
//! Only printable ASCII (32–126) plus newline and tab can be emitted as
//! keystrokes; everything else is discarded outright, with no substitution.

pub fn filter_typeable(text: &str) -> String {
    text.chars()
        .filter(|&c| matches!(c, ' '..='~') || c == '\n' || c == '\t')
        .collect()
}
