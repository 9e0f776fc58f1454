use super::*;

#[test]
fn blank_search_means_no_filter() {
    assert_eq!(normalize_search("   "), None);
    assert_eq!(normalize_search(""), None);
}

#[test]
fn search_text_is_trimmed() {
    assert_eq!(normalize_search("  catan "), Some("catan".to_owned()));
}

#[test]
fn more_pages_while_fewer_loaded_than_total() {
    assert!(has_more(20, 45));
    assert!(!has_more(45, 45));
    assert!(!has_more(0, 0));
}
