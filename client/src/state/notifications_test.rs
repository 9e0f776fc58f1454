use super::*;

fn note(id: i64, is_read: bool) -> Notification {
    Notification { id, message: format!("note {id}"), link: None, is_read, created_at: None }
}

#[test]
fn replace_sets_items_and_clears_error() {
    let mut state = NotificationsState::default();
    state.failed("offline");
    state.replace(vec![note(1, false), note(2, true)]);
    assert!(state.loaded);
    assert_eq!(state.last_error, None);
    assert_eq!(state.unread_count(), 1);
}

#[test]
fn failed_poll_keeps_previous_items() {
    let mut state = NotificationsState::default();
    state.replace(vec![note(1, false)]);
    state.failed("timeout");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.last_error.as_deref(), Some("timeout"));
}

#[test]
fn mark_read_local_is_optimistic_and_revertible() {
    let mut state = NotificationsState::default();
    state.replace(vec![note(1, false), note(2, false)]);
    assert!(state.mark_read_local(1));
    assert_eq!(state.unread_count(), 1);
    state.revert_read(1);
    assert_eq!(state.unread_count(), 2);
}

#[test]
fn mark_read_local_ignores_read_and_unknown_ids() {
    let mut state = NotificationsState::default();
    state.replace(vec![note(1, true)]);
    assert!(!state.mark_read_local(1));
    assert!(!state.mark_read_local(99));
}

#[test]
fn clear_resets_everything() {
    let mut state = NotificationsState::default();
    state.replace(vec![note(1, false)]);
    state.clear();
    assert_eq!(state, NotificationsState::default());
}
