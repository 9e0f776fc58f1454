use super::*;
use std::cell::RefCell;

fn user() -> User {
    User {
        id: 7,
        username: "rook".to_owned(),
        email: "rook@example.com".to_owned(),
        display_name: None,
        avatar_url: None,
        bio: None,
        location: None,
    }
}

// =============================================================
// Session check classification
// =============================================================

#[test]
fn check_success_signs_in() {
    assert_eq!(classify_check(Ok(user())), CheckOutcome::SignedIn(user()));
}

#[test]
fn check_unauthorized_signs_out_quietly() {
    let outcome = classify_check(Err(ApiError::Unauthorized("no session".to_owned())));
    assert_eq!(outcome, CheckOutcome::SignedOut);
}

#[test]
fn check_transport_failure_reports_message() {
    let outcome = classify_check(Err(ApiError::Timeout));
    assert_eq!(outcome, CheckOutcome::Failed("The server took too long to respond.".to_owned()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn check_without_browser_fails_as_connection_error() {
    let err = futures::executor::block_on(check_session()).unwrap_err();
    assert!(matches!(err, ApiError::Connection(_)));
}

// =============================================================
// Bootstrap and expiry
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn bootstrap_without_flag_cookie_signs_out_immediately() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState::pending());
        let toasts = RwSignal::new(ToastState::default());
        bootstrap_session(auth, toasts);
        let state = auth.get_untracked();
        assert!(state.checked);
        assert!(!state.loading);
        assert!(state.user.is_none());
    });
}

#[test]
fn expire_session_signs_out_toasts_once_and_redirects() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState::default());
        auth.update(|a| a.signed_in(user()));
        let toasts = RwSignal::new(ToastState::default());
        let visited = RefCell::new(Vec::new());
        let navigate = |path: &str, _opts: NavigateOptions| visited.borrow_mut().push(path.to_owned());

        expire_session(auth, toasts, &navigate);
        expire_session(auth, toasts, &navigate);

        let state = auth.get_untracked();
        assert!(state.user.is_none());
        assert!(state.expired);
        assert_eq!(toasts.get_untracked().toasts.len(), 1);
        assert_eq!(toasts.get_untracked().toasts[0].message, EXPIRED_MESSAGE);
        assert_eq!(*visited.borrow(), vec!["/login".to_owned(), "/login".to_owned()]);
    });
}

#[test]
fn unauthorized_response_triggers_installed_handler() {
    let owner = Owner::new();
    owner.with(|| {
        let auth = RwSignal::new(AuthState::default());
        auth.update(|a| a.signed_in(user()));
        let toasts = RwSignal::new(ToastState::default());
        let visited = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = visited.clone();
        install_session_expiry_handler(auth, toasts, move |path: &str, _opts: NavigateOptions| {
            sink.borrow_mut().push(path.to_owned());
        });

        // Simulates the HTTP client seeing a 401 on an authenticated call.
        let result = crate::net::client::check_status(401, "", crate::net::client::RequestOptions::default());
        assert!(result.unwrap_err().is_unauthorized());

        assert!(!auth.get_untracked().is_authenticated());
        assert_eq!(*visited.borrow(), vec!["/login".to_owned()]);
        crate::net::client::clear_unauthorized_handler();
    });
}
