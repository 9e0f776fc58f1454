use super::*;

#[test]
fn default_draft_is_valid_good_condition() {
    let input = validate(&InstanceDraft::default()).unwrap();
    assert_eq!(input.condition, InstanceCondition::Good);
    assert!(input.is_available);
    assert_eq!(input.notes, None);
}

#[test]
fn unknown_condition_is_rejected() {
    let draft = InstanceDraft { condition: "other".to_owned(), ..InstanceDraft::default() };
    assert_eq!(validate(&draft).unwrap_err().get("condition"), Some("Choose a condition."));
}

#[test]
fn notes_are_trimmed_and_bounded() {
    let draft = InstanceDraft { notes: "  missing one die ".to_owned(), ..InstanceDraft::default() };
    assert_eq!(validate(&draft).unwrap().notes.as_deref(), Some("missing one die"));
    let draft = InstanceDraft { notes: "n".repeat(NOTES_MAX + 1), ..InstanceDraft::default() };
    assert!(validate(&draft).unwrap_err().has("notes"));
}
