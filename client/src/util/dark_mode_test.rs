#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn stored_preference_wins_over_system() {
    assert!(preference_from_stored(Some(true), false));
    assert!(!preference_from_stored(Some(false), true));
}

#[test]
fn system_preference_used_when_nothing_stored() {
    assert!(preference_from_stored(None, true));
    assert!(!preference_from_stored(None, false));
}

#[test]
fn toggled_value_reads_back_as_same_preference() {
    for enabled in [true, false] {
        let raw = storage::DARK_MODE.encode(&enabled).unwrap();
        assert_eq!(preference_from_stored(storage::DARK_MODE.decode(&raw), !enabled), enabled);
    }
}

#[test]
fn corrupted_stored_value_falls_back_to_system() {
    assert!(preference_from_stored(storage::DARK_MODE.decode("yes please"), true));
}

#[test]
fn read_preference_is_false_in_non_hydrate_tests() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}
