//! Borrow request form.

#[cfg(test)]
#[path = "borrow_test.rs"]
mod borrow_test;

use chrono::NaiveDate;

use super::{FormErrors, bounded_text};
use crate::net::types::BorrowRequestInput;

pub const MAX_SPAN_DAYS: i64 = 60;
pub const MESSAGE_MAX: usize = 500;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BorrowDraft {
    pub start_date: String,
    pub end_date: String,
    pub message: String,
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// # Errors
///
/// Field errors for missing/past dates, reversed ranges, spans over
/// `MAX_SPAN_DAYS`, or an overlong message.
pub fn validate(draft: &BorrowDraft, instance_id: i64, today: NaiveDate) -> Result<BorrowRequestInput, FormErrors> {
    let mut errors = FormErrors::new();

    let start = parse_date(&draft.start_date);
    if start.is_none() {
        errors.add("start_date", "Choose a start date.");
    }
    let end = parse_date(&draft.end_date);
    if end.is_none() {
        errors.add("end_date", "Choose a return date.");
    }
    if start.is_some_and(|s| s < today) {
        errors.add("start_date", "Start date cannot be in the past.");
    }
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            errors.add("end_date", "Return date must be on or after the start date.");
        } else if (end - start).num_days() > MAX_SPAN_DAYS {
            errors.add("end_date", format!("Loans can last at most {MAX_SPAN_DAYS} days."));
        }
    }
    let message = bounded_text(&mut errors, "message", "Message", &draft.message, MESSAGE_MAX);

    errors.finish(|| BorrowRequestInput {
        instance_id,
        start_date: start.unwrap_or(today),
        end_date: end.unwrap_or(today),
        message,
    })
}
