use super::*;

fn user(id: i64) -> User {
    User {
        id,
        username: format!("user{id}"),
        email: format!("user{id}@example.com"),
        display_name: None,
        avatar_url: None,
        bio: None,
        location: None,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.checked);
}

#[test]
fn pending_state_is_loading() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn signed_in_stores_user_and_finishes_check() {
    let mut state = AuthState::pending();
    state.signed_in(user(3));
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert!(state.checked);
    assert_eq!(state.user_id(), Some(3));
    assert!(state.owns(3));
    assert!(!state.owns(4));
}

#[test]
fn signed_out_clears_user() {
    let mut state = AuthState::default();
    state.signed_in(user(1));
    state.signed_out();
    assert!(!state.is_authenticated());
    assert!(state.checked);
    assert!(!state.expired);
}

#[test]
fn session_expired_marks_flag() {
    let mut state = AuthState::default();
    state.signed_in(user(1));
    state.session_expired();
    assert!(state.user.is_none());
    assert!(state.expired);
    assert!(!state.loading);
}

#[test]
fn signing_in_again_clears_expired_flag() {
    let mut state = AuthState::default();
    state.session_expired();
    state.signed_in(user(2));
    assert!(!state.expired);
}

#[test]
fn begin_check_keeps_existing_user() {
    let mut state = AuthState::default();
    state.signed_in(user(5));
    state.begin_check();
    assert!(state.loading);
    assert_eq!(state.user_id(), Some(5));
}
