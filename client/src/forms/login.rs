//! Sign-in form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::FormErrors;
use crate::net::types::LoginInput;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginDraft {
    /// Username or email.
    pub username: String,
    pub password: String,
}

/// # Errors
///
/// Field errors for blank username or password.
pub fn validate(draft: &LoginDraft) -> Result<LoginInput, FormErrors> {
    let mut errors = FormErrors::new();
    let username = draft.username.trim();
    if username.is_empty() {
        errors.add("username", "Enter your username or email.");
    }
    if draft.password.trim().is_empty() {
        errors.add("password", "Enter your password.");
    }
    errors.finish(|| LoginInput { username: username.to_owned(), password: draft.password.clone() })
}
