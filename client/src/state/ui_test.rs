use super::*;

#[test]
fn ui_state_default_is_light_and_closed() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.nav_open);
    assert!(!state.notifications_open);
    assert!(!state.user_menu_open);
}

#[test]
fn with_dark_mode_sets_theme_only() {
    let state = UiState::with_dark_mode(true);
    assert!(state.dark_mode);
    assert!(!state.notifications_open);
}

#[test]
fn overlays_are_mutually_exclusive() {
    let mut state = UiState::default();
    state.toggle_user_menu();
    assert!(state.user_menu_open);
    state.toggle_notifications();
    assert!(state.notifications_open);
    assert!(!state.user_menu_open);
    state.toggle_notifications();
    assert!(!state.notifications_open);
}

#[test]
fn close_overlays_keeps_theme() {
    let mut state = UiState { dark_mode: true, nav_open: true, notifications_open: true, user_menu_open: false };
    state.close_overlays();
    assert_eq!(state, UiState::with_dark_mode(true));
}
