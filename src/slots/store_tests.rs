//! Tests for the slot store

use super::*;
use proptest::prelude::*;

#[test]
fn test_new_store_is_all_empty() {
    let store = SlotStore::new();
    assert_eq!(store.iter().count(), SLOT_COUNT);
    assert!(store.iter().all(str::is_empty));
    assert_eq!(store.first_empty(), Some(0));
}

#[test]
fn test_set_get_clear() {
    let mut store = SlotStore::new();
    store.set(2, "ssh prod-box");
    assert_eq!(store.get(2), "ssh prod-box");
    store.clear(2);
    assert_eq!(store.get(2), "");
}

#[test]
#[should_panic]
fn test_out_of_range_get_panics() {
    let store = SlotStore::new();
    let _ = store.get(SLOT_COUNT);
}

#[test]
#[should_panic]
fn test_out_of_range_set_panics() {
    let mut store = SlotStore::new();
    store.set(SLOT_COUNT, "nope");
}

#[test]
fn test_first_empty_skips_occupied() {
    let mut store = SlotStore::new();
    store.set(0, "a");
    store.set(1, "b");
    assert_eq!(store.first_empty(), Some(2));
}

#[test]
fn test_first_empty_treats_whitespace_as_empty() {
    let mut store = SlotStore::new();
    store.set(0, "a");
    store.set(1, "   \t");
    assert_eq!(store.first_empty(), Some(1));
}

#[test]
fn test_first_empty_none_when_full() {
    let mut store = SlotStore::new();
    for i in 0..SLOT_COUNT {
        store.set(i, format!("slot {}", i));
    }
    assert_eq!(store.first_empty(), None);
}

#[test]
fn test_contains_is_exact_match() {
    let mut store = SlotStore::new();
    store.set(3, "hello ");
    assert!(store.contains("hello "));
    assert!(!store.contains("hello"));
}

#[test]
fn test_import_pads_short_input() {
    let mut store = SlotStore::new();
    store.import_all(vec!["a".into(), "b".into()]);
    assert_eq!(store.get(0), "a");
    assert_eq!(store.get(1), "b");
    assert_eq!(store.get(2), "");
    assert_eq!(store.iter().count(), SLOT_COUNT);
}

#[test]
fn test_import_ignores_extra_entries() {
    let mut store = SlotStore::new();
    let input: Vec<String> = (0..10).map(|i| format!("v{}", i)).collect();
    store.import_all(input);
    assert_eq!(store.iter().count(), SLOT_COUNT);
    assert_eq!(store.get(SLOT_COUNT - 1), "v5");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // export_all followed by import_all reproduces the original values,
    // and shorter-than-N inputs pad with "".
    #[test]
    fn prop_export_import_round_trip(values in prop::collection::vec(".{0,40}", 0..=SLOT_COUNT)) {
        let mut store = SlotStore::new();
        store.import_all(values.clone());

        let exported = store.export_all();
        prop_assert_eq!(exported.len(), SLOT_COUNT);
        for (i, v) in exported.iter().enumerate() {
            let expected = values.get(i).map(String::as_str).unwrap_or("");
            prop_assert_eq!(v.as_str(), expected);
        }

        let mut reimported = SlotStore::new();
        reimported.import_all(exported);
        prop_assert_eq!(reimported, store);
    }

    // first_empty always returns the lowest-index trimmed-empty slot.
    #[test]
    fn prop_first_empty_is_lowest(values in prop::collection::vec(prop::sample::select(vec!["", " ", "x", "text"]), SLOT_COUNT)) {
        let mut store = SlotStore::new();
        store.import_all(values.iter().map(|s| s.to_string()).collect());

        let expected = values.iter().position(|v| v.trim().is_empty());
        prop_assert_eq!(store.first_empty(), expected);
    }
}
