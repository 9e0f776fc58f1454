//! Display formatting for dates, times, and game metadata.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

/// Local wall-clock time, matching what `datetime-local` inputs produce.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn today() -> NaiveDate {
    now_local().date()
}

pub fn current_year() -> i32 {
    today().year()
}

/// `Sat, Nov 1 2026`
pub fn date(value: NaiveDate) -> String {
    value.format("%a, %b %-d %Y").to_string()
}

/// `Sat, Nov 1 2026 · 6:00 PM`
pub fn date_time(value: NaiveDateTime) -> String {
    value.format("%a, %b %-d %Y · %-I:%M %p").to_string()
}

/// Event span; the end date is omitted when it falls on the start day.
pub fn time_range(start: NaiveDateTime, end: NaiveDateTime) -> String {
    if start.date() == end.date() {
        format!("{} – {}", date_time(start), end.format("%-I:%M %p"))
    } else {
        format!("{} – {}", date_time(start), date_time(end))
    }
}

pub fn date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end { date(start) } else { format!("{} – {}", date(start), date(end)) }
}

pub fn player_range(min: u32, max: u32) -> String {
    match (min, max) {
        (1, 1) => "1 player".to_owned(),
        (a, b) if a == b => format!("{a} players"),
        (a, b) => format!("{a}–{b} players"),
    }
}

/// `45 min`, `2 h`, `1 h 30 min`
pub fn playtime(minutes: u32) -> String {
    let (h, m) = (minutes / 60, minutes % 60);
    match (h, m) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} h"),
        (h, m) => format!("{h} h {m} min"),
    }
}

/// One decimal place, or a dash when unrated.
pub fn rating(average: Option<f32>) -> String {
    average.map_or_else(|| "–".to_owned(), |r| format!("{r:.1}"))
}

/// `★★★☆☆`
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

pub fn spots_left(spots: Option<u32>) -> String {
    match spots {
        None => "Open attendance".to_owned(),
        Some(0) => "Full".to_owned(),
        Some(1) => "1 spot left".to_owned(),
        Some(n) => format!("{n} spots left"),
    }
}
