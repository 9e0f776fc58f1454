//! Add/edit game instance form.

#[cfg(test)]
#[path = "instance_test.rs"]
mod instance_test;

use super::{FormErrors, bounded_text};
use crate::net::types::{GameInstance, InstanceCondition, InstanceInput};

pub const NOTES_MAX: usize = 500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstanceDraft {
    /// Wire value from the condition `<select>`.
    pub condition: String,
    pub notes: String,
    pub is_available: bool,
}

impl Default for InstanceDraft {
    fn default() -> Self {
        Self {
            condition: InstanceCondition::Good.as_str().to_owned(),
            notes: String::new(),
            is_available: true,
        }
    }
}

impl InstanceDraft {
    pub fn from_instance(instance: &GameInstance) -> Self {
        Self {
            condition: instance.condition.as_str().to_owned(),
            notes: instance.notes.clone().unwrap_or_default(),
            is_available: instance.is_available,
        }
    }
}

/// # Errors
///
/// Field errors for an unknown condition or overlong notes.
pub fn validate(draft: &InstanceDraft) -> Result<InstanceInput, FormErrors> {
    let mut errors = FormErrors::new();
    let condition = InstanceCondition::parse(draft.condition.trim());
    if condition.is_none() {
        errors.add("condition", "Choose a condition.");
    }
    let notes = bounded_text(&mut errors, "notes", "Notes", &draft.notes, NOTES_MAX);
    errors.finish(|| InstanceInput {
        condition: condition.unwrap_or_default(),
        notes,
        is_available: draft.is_available,
    })
}
