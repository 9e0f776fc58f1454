#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn slot_keys_are_distinct_and_app_scoped() {
    assert_eq!(DARK_MODE.key(), "boardshare_dark_mode");
    assert_eq!(GAMES_SEARCH.key(), "boardshare_games_search");
}

#[test]
fn bool_slot_uses_plain_true_false() {
    assert_eq!(DARK_MODE.encode(&true).as_deref(), Some("true"));
    assert_eq!(DARK_MODE.decode("false"), Some(false));
}

#[test]
fn wrong_shape_reads_as_empty() {
    assert_eq!(DARK_MODE.decode("\"dark\""), None);
    assert_eq!(GAMES_SEARCH.decode("42"), None);
    assert_eq!(GAMES_SEARCH.decode("not json"), None);
}

#[test]
fn search_text_survives_quotes() {
    let raw = GAMES_SEARCH.encode(&"\"azul\" 2p".to_owned()).unwrap();
    assert_eq!(GAMES_SEARCH.decode(&raw).as_deref(), Some("\"azul\" 2p"));
}

#[test]
fn load_is_none_outside_browser() {
    GAMES_SEARCH.save(&"catan".to_owned());
    assert_eq!(GAMES_SEARCH.load(), None);
    GAMES_SEARCH.clear();
}
