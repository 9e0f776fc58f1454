//! Account creation form.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use super::FormErrors;
use crate::net::types::RegisterInput;

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 32;
pub const PASSWORD_MIN: usize = 8;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// # Errors
///
/// Field errors for username shape, email shape, password length, or a
/// confirmation mismatch.
pub fn validate(draft: &RegisterDraft) -> Result<RegisterInput, FormErrors> {
    let mut errors = FormErrors::new();

    let username = draft.username.trim();
    let len = username.chars().count();
    if username.is_empty() {
        errors.add("username", "Choose a username.");
    } else if !(USERNAME_MIN..=USERNAME_MAX).contains(&len) {
        errors.add(
            "username",
            format!("Username must be {USERNAME_MIN}-{USERNAME_MAX} characters."),
        );
    } else if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        errors.add("username", "Use only letters, numbers, and underscores.");
    }

    let email = draft.email.trim();
    if email.is_empty() {
        errors.add("email", "Enter your email.");
    } else if !is_plausible_email(email) {
        errors.add("email", "Enter a valid email address.");
    }

    if draft.password.chars().count() < PASSWORD_MIN {
        errors.add("password", format!("Password must be at least {PASSWORD_MIN} characters."));
    }
    if draft.password != draft.confirm_password {
        errors.add("confirm_password", "Passwords do not match.");
    }

    errors.finish(|| RegisterInput {
        username: username.to_owned(),
        email: email.to_owned(),
        password: draft.password.clone(),
    })
}

/// One `@`, non-empty local part, and a dotted domain with no empty labels.
pub fn is_plausible_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !raw.contains(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}
