use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// =============================================================
// User / PublicProfile
// =============================================================

#[test]
fn user_label_prefers_display_name() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 1,
        "username": "meeple",
        "email": "m@example.com",
        "display_name": "Meeple Mike"
    }))
    .unwrap();
    assert_eq!(user.label(), "Meeple Mike");
}

#[test]
fn user_label_falls_back_to_username_for_blank_display_name() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 1,
        "username": "meeple",
        "email": "m@example.com",
        "display_name": "   "
    }))
    .unwrap();
    assert_eq!(user.label(), "meeple");
}

#[test]
fn public_profile_defaults_counts() {
    let profile: PublicProfile =
        serde_json::from_value(serde_json::json!({ "id": 9, "username": "dice" })).unwrap();
    assert_eq!(profile.games_owned, 0);
    assert_eq!(profile.events_hosted, 0);
    assert_eq!(profile.label(), "dice");
}

// =============================================================
// Enums
// =============================================================

#[test]
fn instance_condition_uses_snake_case_on_the_wire() {
    assert_eq!(serde_json::to_string(&InstanceCondition::LikeNew).unwrap(), "\"like_new\"");
    let parsed: InstanceCondition = serde_json::from_str("\"fair\"").unwrap();
    assert_eq!(parsed, InstanceCondition::Fair);
}

#[test]
fn instance_condition_unknown_value_maps_to_other() {
    let parsed: InstanceCondition = serde_json::from_str("\"mint_in_shrink\"").unwrap();
    assert_eq!(parsed, InstanceCondition::Other);
}

#[test]
fn instance_condition_parse_only_accepts_selectable_values() {
    assert_eq!(InstanceCondition::parse("like_new"), Some(InstanceCondition::LikeNew));
    assert_eq!(InstanceCondition::parse("other"), None);
    assert_eq!(InstanceCondition::parse(""), None);
}

#[test]
fn borrow_status_round_trips_known_values() {
    let parsed: BorrowStatus = serde_json::from_str("\"approved\"").unwrap();
    assert_eq!(parsed, BorrowStatus::Approved);
    assert!(BorrowStatus::Pending.is_open());
    assert!(!BorrowStatus::Returned.is_open());
}

#[test]
fn borrow_status_unknown_value_maps_to_other() {
    let parsed: BorrowStatus = serde_json::from_str("\"escalated\"").unwrap();
    assert_eq!(parsed, BorrowStatus::Other);
    assert_eq!(parsed.label(), "Unknown");
}

// =============================================================
// Events
// =============================================================

fn make_event(max: Option<u32>, count: u32) -> Event {
    serde_json::from_value(serde_json::json!({
        "id": 3,
        "title": "Catan night",
        "location": "Library",
        "start_time": "2026-11-01T18:00:00",
        "end_time": "2026-11-01T22:00:00",
        "max_participants": max,
        "organizer_id": 1,
        "participant_count": count
    }))
    .unwrap()
}

#[test]
fn event_parses_naive_datetimes() {
    let event = make_event(None, 0);
    assert_eq!(event.start_time.to_string(), "2026-11-01 18:00:00");
    assert!(event.end_time > event.start_time);
    assert_eq!(event.my_registration_id, None);
}

#[test]
fn event_capacity_helpers() {
    assert!(!make_event(None, 50).is_full());
    assert_eq!(make_event(None, 50).spots_left(), None);
    assert!(make_event(Some(4), 4).is_full());
    assert_eq!(make_event(Some(4), 1).spots_left(), Some(3));
    assert_eq!(make_event(Some(4), 6).spots_left(), Some(0));
}

// =============================================================
// Instances, availability, lending
// =============================================================

#[test]
fn game_instance_defaults_to_available_good_condition() {
    let inst: GameInstance = serde_json::from_value(serde_json::json!({
        "id": 1,
        "game_id": 2,
        "owner_id": 3
    }))
    .unwrap();
    assert!(inst.is_available);
    assert_eq!(inst.condition, InstanceCondition::Good);
}

#[test]
fn availability_reports_free_copies() {
    let none = Availability { total_copies: 2, available_copies: 0, next_available_date: None };
    let some = Availability { total_copies: 2, available_copies: 1, next_available_date: None };
    assert!(!none.is_available());
    assert!(some.is_available());
}

#[test]
fn lending_record_overdue_only_when_unreturned_and_past_due() {
    let mut record: LendingRecord = serde_json::from_value(serde_json::json!({
        "id": 1,
        "instance_id": 2,
        "lender_id": 3,
        "borrower_id": 4,
        "start_date": "2026-10-01",
        "due_date": "2026-10-10"
    }))
    .unwrap();
    assert!(!record.is_overdue(date(2026, 10, 10)));
    assert!(record.is_overdue(date(2026, 10, 11)));

    record.returned_at = Some(date(2026, 10, 12).and_hms_opt(9, 0, 0).unwrap());
    assert!(!record.is_overdue(date(2026, 10, 20)));
}

#[test]
fn page_envelope_defaults_total() {
    let page: Page<Review> = serde_json::from_value(serde_json::json!({ "items": [] })).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
}

#[test]
fn borrow_request_input_serializes_iso_dates() {
    let input = BorrowRequestInput {
        instance_id: 7,
        start_date: date(2026, 11, 2),
        end_date: date(2026, 11, 9),
        message: None,
    };
    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(value["start_date"], "2026-11-02");
    assert_eq!(value["end_date"], "2026-11-09");
    assert_eq!(value["message"], serde_json::Value::Null);
}
