//! Review form (star rating plus optional comment).

#[cfg(test)]
#[path = "review_test.rs"]
mod review_test;

use super::{FormErrors, bounded_text};
use crate::net::types::ReviewInput;

pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 5;
pub const COMMENT_MAX: usize = 1000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    /// 0 until a star is picked.
    pub rating: u8,
    pub comment: String,
}

/// # Errors
///
/// Field errors for a missing/out-of-range rating or overlong comment.
pub fn validate(draft: &ReviewDraft) -> Result<ReviewInput, FormErrors> {
    let mut errors = FormErrors::new();
    if !(RATING_MIN..=RATING_MAX).contains(&draft.rating) {
        errors.add("rating", format!("Pick a rating from {RATING_MIN} to {RATING_MAX} stars."));
    }
    let comment = bounded_text(&mut errors, "comment", "Comment", &draft.comment, COMMENT_MAX);
    errors.finish(|| ReviewInput { rating: draft.rating, comment })
}
