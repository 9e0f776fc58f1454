use super::*;

#[test]
fn unrated_review_is_rejected() {
    let errors = validate(&ReviewDraft::default()).unwrap_err();
    assert_eq!(errors.get("rating"), Some("Pick a rating from 1 to 5 stars."));
}

#[test]
fn rating_above_five_is_rejected() {
    assert!(validate(&ReviewDraft { rating: 6, comment: String::new() }).is_err());
}

#[test]
fn comment_is_optional_and_bounded() {
    let input = validate(&ReviewDraft { rating: 4, comment: "  ".to_owned() }).unwrap();
    assert_eq!(input, ReviewInput { rating: 4, comment: None });
    let long = ReviewDraft { rating: 4, comment: "c".repeat(COMMENT_MAX + 1) };
    assert!(validate(&long).unwrap_err().has("comment"));
}
