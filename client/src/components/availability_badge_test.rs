use super::*;
use chrono::NaiveDate;

#[test]
fn text_counts_free_copies() {
    let a = Availability { total_copies: 3, available_copies: 2, next_available_date: None };
    assert_eq!(availability_text(&a), "2 of 3 available");
}

#[test]
fn text_shows_return_date_when_all_lent() {
    let a = Availability {
        total_copies: 1,
        available_copies: 0,
        next_available_date: NaiveDate::from_ymd_opt(2026, 11, 1),
    };
    assert_eq!(availability_text(&a), "All lent out · back Sun, Nov 1 2026");
}

#[test]
fn text_for_no_copies() {
    assert_eq!(availability_text(&Availability::default()), "No copies listed");
}
