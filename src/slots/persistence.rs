//! Slots file persistence
//!
//! The on-disk format is a JSON array of exactly [`SLOT_COUNT`] strings,
//! 2-space indented, ordered by slot index. Loading tolerates short arrays
//! (missing trailing slots default to empty) and ignores extra entries;
//! anything that is not an array of strings is a hard error for the caller
//! to surface.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::CliptyperError;

use super::store::{SLOT_COUNT, SlotStore};

pub fn save_slots(store: &SlotStore, path: &Path) -> Result<(), CliptyperError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&store.export_all())?;
    fs::write(path, json)?;

    #[cfg(debug_assertions)]
    log::debug!("Saved {} slots to {:?}", SLOT_COUNT, path);

    Ok(())
}

pub fn load_slots(path: &Path) -> Result<SlotStore, CliptyperError> {
    let contents = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&contents)?;

    let Value::Array(entries) = value else {
        return Err(CliptyperError::InvalidSlotsFile(format!(
            "expected a JSON array, got {}",
            json_type_name(&value)
        )));
    };

    // Entries beyond the slot count are ignored outright, whatever they are
    let mut values = Vec::with_capacity(SLOT_COUNT);
    for (i, entry) in entries.into_iter().take(SLOT_COUNT).enumerate() {
        match entry {
            Value::String(s) => values.push(s),
            other => {
                return Err(CliptyperError::InvalidSlotsFile(format!(
                    "entry {} is {}, expected a string",
                    i,
                    json_type_name(&other)
                )));
            }
        }
    }

    let mut store = SlotStore::new();
    store.import_all(values);
    Ok(store)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "persistence_tests.rs"]
mod persistence_tests;
