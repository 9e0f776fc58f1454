use super::borrowing::{BorrowRole, Decision};
use super::events::EventQuery;
use super::games::GameQuery;
use super::*;

#[test]
fn auth_paths_match_backend_routes() {
    assert_eq!(auth::LOGIN_PATH, "/auth/login");
    assert_eq!(auth::REGISTER_PATH, "/auth/register");
    assert_eq!(auth::LOGOUT_PATH, "/auth/logout");
    assert_eq!(auth::ME_PATH, "/users/me");
}

#[test]
fn games_path_without_filters_is_bare() {
    assert_eq!(games::games_path(&GameQuery::default()), "/api/games");
}

#[test]
fn games_path_encodes_filters() {
    let query = GameQuery { search: Some("azul".to_owned()), owner_id: Some(4), page: Some(2) };
    assert_eq!(games::games_path(&query), "/api/games?search=azul&owner_id=4&page=2");
}

#[test]
fn game_subresource_paths() {
    assert_eq!(games::game_path(12), "/api/games/12");
    assert_eq!(games::availability_path(12), "/api/games/12/availability");
    assert_eq!(games::copy_path(12), "/api/games/12/copy");
    assert_eq!(instances::instances_path(12), "/api/games/12/instances");
    assert_eq!(instances::instance_path(12, 3), "/api/games/12/instances/3");
    assert_eq!(reviews::game_reviews_path(12), "/api/games/12/reviews");
    assert_eq!(reviews::review_path(40), "/api/reviews/40");
}

#[test]
fn events_path_only_includes_enabled_flags() {
    assert_eq!(events::events_path(EventQuery::default()), "/api/events");
    assert_eq!(
        events::events_path(EventQuery { upcoming_only: true, mine: false }),
        "/api/events?upcoming=true"
    );
    assert_eq!(
        events::events_path(EventQuery { upcoming_only: true, mine: true }),
        "/api/events?upcoming=true&mine=true"
    );
    assert_eq!(events::event_registrations_path(5), "/api/events/5/registrations");
}

#[test]
fn registration_paths() {
    assert_eq!(registrations::registration_path(8), "/api/registrations/8");
    assert_eq!(registrations::MY_REGISTRATIONS_PATH, "/api/registrations?mine=true");
}

#[test]
fn borrowing_paths() {
    assert_eq!(borrowing::requests_path(BorrowRole::Owner), "/api/borrow-requests?role=owner");
    assert_eq!(borrowing::requests_path(BorrowRole::Borrower), "/api/borrow-requests?role=borrower");
    assert_eq!(borrowing::decision_path(3, Decision::Approve), "/api/borrow-requests/3/approve");
    assert_eq!(borrowing::decision_path(3, Decision::Reject), "/api/borrow-requests/3/reject");
    assert_eq!(borrowing::request_path(3), "/api/borrow-requests/3");
    assert_eq!(borrowing::return_path(9), "/api/lending-records/9/return");
}

#[test]
fn user_search_percent_encodes_query() {
    assert_eq!(users::search_path("ann & bo"), "/users/search?q=ann+%26+bo");
    assert_eq!(users::profile_path(77), "/users/77");
}

#[test]
fn blank_user_search_skips_the_request() {
    let result = futures::executor::block_on(users::search_users("   "));
    assert_eq!(result, Ok(Vec::new()));
}

#[test]
fn notification_paths() {
    assert_eq!(notifications::NOTIFICATIONS_PATH, "/api/notifications");
    assert_eq!(notifications::read_path(2), "/api/notifications/2/read");
}
