use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push_at(ToastKind::Info, "a", 0);
    let b = state.push_at(ToastKind::Error, "b", 0);
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push_at(ToastKind::Info, "a", 0);
    state.push_at(ToastKind::Info, "b", 0);
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "b");
}

#[test]
fn queue_is_capped_and_evicts_oldest() {
    let mut state = ToastState::default();
    for i in 0..(MAX_TOASTS + 2) {
        state.push_at(ToastKind::Info, format!("t{i}"), 0);
    }
    assert_eq!(state.toasts.len(), MAX_TOASTS);
    assert_eq!(state.toasts[0].message, "t2");
}

#[test]
fn prune_drops_expired_toasts() {
    let mut state = ToastState::default();
    state.push_at(ToastKind::Info, "old", 1_000);
    state.push_at(ToastKind::Info, "new", 1_000 + TOAST_TTL_MS);
    assert!(state.prune(1_000 + TOAST_TTL_MS));
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "new");
    assert!(!state.prune(1_000 + TOAST_TTL_MS));
}

#[test]
fn prune_tolerates_clock_skew() {
    let mut state = ToastState::default();
    state.push_at(ToastKind::Info, "future", 10_000);
    assert!(!state.prune(5_000));
}

#[test]
fn helpers_use_matching_kind() {
    let mut state = ToastState::default();
    state.success("saved");
    state.error("failed");
    state.info("fyi");
    let kinds: Vec<_> = state.toasts.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![ToastKind::Success, ToastKind::Error, ToastKind::Info]);
}

#[test]
fn now_ms_is_after_2020() {
    assert!(now_ms() > 1_577_836_800_000);
}

#[test]
fn api_error_toasts_user_message_but_skips_unauthorized() {
    let mut state = ToastState::default();
    assert!(state.api_error(&ApiError::Unauthorized("gone".to_owned())).is_none());
    assert!(state.api_error(&ApiError::Forbidden("Not yours.".to_owned())).is_some());
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "Not yours.");
    assert_eq!(state.toasts[0].kind, ToastKind::Error);
}
