use super::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn draft(start: &str, end: &str) -> BorrowDraft {
    BorrowDraft { start_date: start.to_owned(), end_date: end.to_owned(), message: String::new() }
}

#[test]
fn same_day_loan_is_valid() {
    let input = validate(&draft("2026-10-19", "2026-10-19"), 4, today()).unwrap();
    assert_eq!(input.instance_id, 4);
    assert_eq!(input.start_date, today());
}

#[test]
fn past_start_is_rejected() {
    let errors = validate(&draft("2026-10-18", "2026-10-20"), 4, today()).unwrap_err();
    assert_eq!(errors.get("start_date"), Some("Start date cannot be in the past."));
}

#[test]
fn reversed_range_is_rejected() {
    let errors = validate(&draft("2026-10-25", "2026-10-20"), 4, today()).unwrap_err();
    assert!(errors.has("end_date"));
}

#[test]
fn span_is_capped() {
    assert!(validate(&draft("2026-10-20", "2026-12-19"), 4, today()).is_ok());
    let errors = validate(&draft("2026-10-20", "2026-12-20"), 4, today()).unwrap_err();
    assert_eq!(errors.get("end_date"), Some("Loans can last at most 60 days."));
}

#[test]
fn missing_dates_are_reported() {
    let errors = validate(&draft("", "nope"), 4, today()).unwrap_err();
    assert!(errors.has("start_date"));
    assert!(errors.has("end_date"));
}

#[test]
fn message_is_optional_and_trimmed() {
    let mut d = draft("2026-10-20", "2026-10-22");
    d.message = "  for game night  ".to_owned();
    assert_eq!(validate(&d, 1, today()).unwrap().message.as_deref(), Some("for game night"));
}
