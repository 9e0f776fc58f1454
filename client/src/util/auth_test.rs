use super::*;
use crate::net::types::User;

fn user() -> User {
    User {
        id: 1,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        display_name: None,
        avatar_url: None,
        bio: None,
        location: None,
    }
}

#[test]
fn should_redirect_unauth_when_checked_and_user_missing() {
    let mut state = AuthState::default();
    state.signed_out();
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::pending()));
}

#[test]
fn should_not_redirect_before_first_check() {
    assert!(!should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let mut state = AuthState::default();
    state.signed_in(user());
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn expired_session_redirects() {
    let mut state = AuthState::default();
    state.signed_in(user());
    state.session_expired();
    assert!(should_redirect_unauth(&state));
}
