use super::*;

#[test]
fn only_latest_ticket_is_current() {
    let d = Debouncer::new();
    let a = d.next();
    let b = d.next();
    assert!(!d.is_current(a));
    assert!(d.is_current(b));
}

#[test]
fn clones_share_generation() {
    let d = Debouncer::new();
    let clone = d.clone();
    let ticket = d.next();
    assert!(clone.is_current(ticket));
    clone.next();
    assert!(!d.is_current(ticket));
}

#[test]
fn cancel_invalidates_outstanding_ticket() {
    let d = Debouncer::new();
    let ticket = d.next();
    d.cancel();
    assert!(!d.is_current(ticket));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn debounce_runs_work_with_current_ticket() {
    let d = Debouncer::new();
    let seen = std::rc::Rc::new(std::cell::Cell::new(false));
    let flag = seen.clone();
    let checker = d.clone();
    debounce(&d, 300, move |ticket| async move {
        flag.set(checker.is_current(ticket));
    });
    assert!(seen.get());
}
