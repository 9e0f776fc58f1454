//! Create/edit event form.
//!
//! Times come from `<input type="datetime-local">`, i.e. local wall-clock
//! `YYYY-MM-DDTHH:MM` with optional seconds. The end must fall strictly
//! after the start; an event that ends before (or exactly when) it starts
//! is rejected here and never sent.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use chrono::NaiveDateTime;

use super::{FormErrors, bounded_text, optional_number, required_text};
use crate::net::types::{Event, EventInput};

pub const TITLE_MAX: usize = 200;
pub const LOCATION_MAX: usize = 200;
pub const DESCRIPTION_MAX: usize = 2000;

const DATETIME_LOCAL: &str = "%Y-%m-%dT%H:%M";
const DATETIME_LOCAL_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_time: String,
    pub end_time: String,
    pub max_participants: String,
}

impl EventDraft {
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            location: event.location.clone(),
            start_time: format_datetime_local(event.start_time),
            end_time: format_datetime_local(event.end_time),
            max_participants: event.max_participants.map(|m| m.to_string()).unwrap_or_default(),
        }
    }
}

/// Parse a `datetime-local` input value.
pub fn parse_datetime_local(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, DATETIME_LOCAL)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, DATETIME_LOCAL_SECONDS))
        .ok()
}

/// Render a value for a `datetime-local` input.
pub fn format_datetime_local(value: NaiveDateTime) -> String {
    value.format(DATETIME_LOCAL).to_string()
}

/// `now` is the user's local wall-clock time; new events may not start in
/// the past. Edits pass `allow_past_start` so an ongoing event stays editable.
///
/// # Errors
///
/// Field errors for title, location, times, or capacity.
pub fn validate(draft: &EventDraft, now: NaiveDateTime, allow_past_start: bool) -> Result<EventInput, FormErrors> {
    let mut errors = FormErrors::new();
    let title = required_text(&mut errors, "title", "Title", &draft.title, TITLE_MAX);
    let location = required_text(&mut errors, "location", "Location", &draft.location, LOCATION_MAX);
    let description = bounded_text(&mut errors, "description", "Description", &draft.description, DESCRIPTION_MAX);

    let start = parse_time(&mut errors, "start_time", "start", &draft.start_time);
    let end = parse_time(&mut errors, "end_time", "end", &draft.end_time);
    if let Some(start) = start {
        if !allow_past_start && start < now {
            errors.add("start_time", "Start time cannot be in the past.");
        }
    }
    if let (Some(start), Some(end)) = (start, end) {
        if end <= start {
            errors.add("end_time", "End time must be after the start time.");
        }
    }

    let max_participants: Option<u32> =
        optional_number(&mut errors, "max_participants", "Max participants", &draft.max_participants);
    if max_participants == Some(0) {
        errors.add("max_participants", "Allow at least one participant.");
    }

    errors.finish(|| EventInput {
        title,
        description,
        location,
        // Both are `Some` whenever no error was recorded.
        start_time: start.unwrap_or(now),
        end_time: end.unwrap_or(now),
        max_participants,
    })
}

fn parse_time(errors: &mut FormErrors, field: &'static str, label: &str, raw: &str) -> Option<NaiveDateTime> {
    if raw.trim().is_empty() {
        errors.add(field, format!("Choose a {label} time."));
        return None;
    }
    let parsed = parse_datetime_local(raw);
    if parsed.is_none() {
        errors.add(field, format!("Enter a valid {label} time."));
    }
    parsed
}
