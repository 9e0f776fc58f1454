use super::*;

fn now() -> NaiveDateTime {
    parse_datetime_local("2026-10-19T12:00").unwrap()
}

fn draft() -> EventDraft {
    EventDraft {
        title: "Catan night".to_owned(),
        description: String::new(),
        location: "Library".to_owned(),
        start_time: "2026-11-01T18:00".to_owned(),
        end_time: "2026-11-01T22:00".to_owned(),
        max_participants: "8".to_owned(),
    }
}

#[test]
fn valid_draft_produces_input() {
    let input = validate(&draft(), now(), false).unwrap();
    assert_eq!(input.title, "Catan night");
    assert_eq!(input.max_participants, Some(8));
    assert!(input.end_time > input.start_time);
}

#[test]
fn end_before_start_is_rejected() {
    let d = EventDraft { end_time: "2026-11-01T17:00".to_owned(), ..draft() };
    let errors = validate(&d, now(), false).unwrap_err();
    assert_eq!(errors.get("end_time"), Some("End time must be after the start time."));
}

#[test]
fn end_equal_to_start_is_rejected() {
    let d = EventDraft { end_time: draft().start_time, ..draft() };
    assert!(validate(&d, now(), false).unwrap_err().has("end_time"));
}

#[test]
fn past_start_is_rejected_for_new_events_only() {
    let d = EventDraft {
        start_time: "2026-10-01T18:00".to_owned(),
        end_time: "2026-10-01T20:00".to_owned(),
        ..draft()
    };
    assert!(validate(&d, now(), false).unwrap_err().has("start_time"));
    assert!(validate(&d, now(), true).is_ok());
}

#[test]
fn seconds_are_accepted() {
    assert!(parse_datetime_local("2026-11-01T18:00:30").is_some());
    assert!(parse_datetime_local("2026-11-01 18:00").is_none());
    assert!(parse_datetime_local("tomorrow").is_none());
}

#[test]
fn missing_and_malformed_times_have_distinct_messages() {
    let d = EventDraft { start_time: String::new(), end_time: "garbage".to_owned(), ..draft() };
    let errors = validate(&d, now(), false).unwrap_err();
    assert_eq!(errors.get("start_time"), Some("Choose a start time."));
    assert_eq!(errors.get("end_time"), Some("Enter a valid end time."));
}

#[test]
fn required_text_fields() {
    let d = EventDraft { title: String::new(), location: " ".to_owned(), ..draft() };
    let errors = validate(&d, now(), false).unwrap_err();
    assert!(errors.has("title"));
    assert!(errors.has("location"));
}

#[test]
fn capacity_is_optional_but_positive() {
    let d = EventDraft { max_participants: String::new(), ..draft() };
    assert_eq!(validate(&d, now(), false).unwrap().max_participants, None);
    let d = EventDraft { max_participants: "0".to_owned(), ..draft() };
    assert!(validate(&d, now(), false).unwrap_err().has("max_participants"));
}

#[test]
fn format_matches_input_value_shape() {
    assert_eq!(format_datetime_local(now()), "2026-10-19T12:00");
}
