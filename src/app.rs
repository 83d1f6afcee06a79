//! Application state, event handling, and rendering

mod events;
mod preview;
mod render;
mod state;

pub use preview::{POLL_INTERVAL, PreviewState};
pub use state::{App, ControlsState, Focus, SlotEditor};
