use chrono::NaiveDate;

use super::*;

fn record(id: i64, lender: i64, borrower: i64, returned: bool) -> LendingRecord {
    let start = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap_or_default();
    LendingRecord {
        id,
        instance_id: id * 10,
        game_title: Some(format!("Game {id}")),
        lender_id: lender,
        lender_username: None,
        borrower_id: borrower,
        borrower_username: None,
        start_date: start,
        due_date: start + chrono::Duration::days(14),
        returned_at: returned.then(|| start.and_hms_opt(12, 0, 0).unwrap_or_default()),
    }
}

#[test]
fn splits_open_loans_by_side() {
    let records = vec![record(1, 5, 8, false), record(2, 8, 5, false), record(3, 5, 9, true)];
    let (lent, borrowed) = open_loans(&records, Some(5));
    assert_eq!(lent.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1]);
    assert_eq!(borrowed.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn records_of_other_users_are_ignored() {
    let records = vec![record(1, 2, 3, false)];
    let (lent, borrowed) = open_loans(&records, Some(5));
    assert!(lent.is_empty());
    assert!(borrowed.is_empty());
}

#[test]
fn no_user_means_no_loans() {
    let (lent, borrowed) = open_loans(&[record(1, 5, 8, false)], None);
    assert!(lent.is_empty() && borrowed.is_empty());
}
