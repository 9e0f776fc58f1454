//! Client-side form validation.
//!
//! Every form has a `*Draft` holding the raw input strings and a `validate`
//! function returning either the typed request payload or per-field errors.
//! Submit handlers only call the API on `Ok`, so invalid input never leaves
//! the browser.


pub mod borrow;
pub mod event;
pub mod game;
pub mod instance;
pub mod login;
pub mod profile;
pub mod register;
pub mod review;

use std::collections::BTreeMap;

/// Field name → message. Empty means valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; the first message per field wins.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(value)` when no errors were recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` when any field failed.
    pub fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

/// Trimmed value, or `None` for blank input.
pub(crate) fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Required trimmed text no longer than `max` chars.
pub(crate) fn required_text(errors: &mut FormErrors, field: &'static str, label: &str, raw: &str, max: usize) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.add(field, format!("{label} is required."));
    } else if trimmed.chars().count() > max {
        errors.add(field, format!("{label} must be at most {max} characters."));
    }
    trimmed.to_owned()
}

/// Optional trimmed text no longer than `max` chars.
pub(crate) fn bounded_text(errors: &mut FormErrors, field: &'static str, label: &str, raw: &str, max: usize) -> Option<String> {
    let value = optional_text(raw);
    if value.as_ref().is_some_and(|v| v.chars().count() > max) {
        errors.add(field, format!("{label} must be at most {max} characters."));
    }
    value
}

/// Optional integer field. Blank is `Ok(None)`; garbage records an error.
pub(crate) fn optional_number<T: std::str::FromStr>(
    errors: &mut FormErrors,
    field: &'static str,
    label: &str,
    raw: &str,
) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            errors.add(field, format!("{label} must be a whole number."));
            None
        }
    }
}
