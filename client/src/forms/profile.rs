//! Edit-own-profile form.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use super::{FormErrors, bounded_text};
use crate::net::types::{ProfileInput, User};

pub const DISPLAY_NAME_MAX: usize = 100;
pub const BIO_MAX: usize = 2000;
pub const LOCATION_MAX: usize = 100;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub display_name: String,
    /// Markdown.
    pub bio: String,
    pub location: String,
}

impl ProfileDraft {
    pub fn from_user(user: &User) -> Self {
        Self {
            display_name: user.display_name.clone().unwrap_or_default(),
            bio: user.bio.clone().unwrap_or_default(),
            location: user.location.clone().unwrap_or_default(),
        }
    }
}

/// Blank fields are sent as `null`, which clears them.
///
/// # Errors
///
/// Field errors for over-long values.
pub fn validate(draft: &ProfileDraft) -> Result<ProfileInput, FormErrors> {
    let mut errors = FormErrors::new();
    let display_name = bounded_text(&mut errors, "display_name", "Display name", &draft.display_name, DISPLAY_NAME_MAX);
    let bio = bounded_text(&mut errors, "bio", "Bio", &draft.bio, BIO_MAX);
    let location = bounded_text(&mut errors, "location", "Location", &draft.location, LOCATION_MAX);
    errors.finish(|| ProfileInput { display_name, bio, location })
}
