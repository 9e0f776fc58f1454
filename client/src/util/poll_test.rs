use super::*;

#[test]
fn handle_stops_for_all_clones() {
    let handle = PollHandle::new();
    let clone = handle.clone();
    assert!(clone.is_running());
    handle.stop();
    assert!(!clone.is_running());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn spawn_poll_is_inert_outside_browser() {
    let calls = std::rc::Rc::new(std::cell::Cell::new(0));
    let counter = calls.clone();
    let handle = spawn_poll(10, true, move || {
        counter.set(counter.get() + 1);
        async {}
    });
    assert!(handle.is_running());
    assert_eq!(calls.get(), 0);
}
