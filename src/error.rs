use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliptyperError {
    #[error("Slots file is not a JSON array of strings: {0}")]
    InvalidSlotsFile(String),

    #[error("Failed to parse slots file: {0}")]
    SlotsParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
