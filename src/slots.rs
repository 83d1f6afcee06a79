//! Quick-slot storage for staged text snippets
//!
//! Six fixed positions, each holding a string ("" = unused), with JSON
//! persistence and the clipboard-swap activation policy.

mod persistence;
mod policy;
mod store;

pub use persistence::{load_slots, save_slots};
pub use policy::{SlotActivation, activate_slot};
pub use store::{SLOT_COUNT, SlotStore};
