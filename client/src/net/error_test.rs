use super::*;

// =============================================================
// Message extraction
// =============================================================

#[test]
fn extract_message_prefers_detail() {
    let body = r#"{"detail":"Game not found","message":"ignored"}"#;
    assert_eq!(extract_message(body), Some("Game not found".to_owned()));
}

#[test]
fn extract_message_falls_back_to_message_then_error() {
    assert_eq!(extract_message(r#"{"message":"bad dates"}"#), Some("bad dates".to_owned()));
    assert_eq!(extract_message(r#"{"error":"nope"}"#), Some("nope".to_owned()));
}

#[test]
fn extract_message_joins_validation_list() {
    let body = r#"{"detail":[{"loc":["body","title"],"msg":"field required"},{"msg":"too short"}]}"#;
    assert_eq!(extract_message(body), Some("field required; too short".to_owned()));
}

#[test]
fn extract_message_skips_blank_detail() {
    assert_eq!(extract_message(r#"{"detail":"  ","error":"fallback"}"#), Some("fallback".to_owned()));
}

#[test]
fn extract_message_handles_non_json() {
    assert_eq!(extract_message("<html>502 Bad Gateway</html>"), None);
    assert_eq!(extract_message(""), None);
}

// =============================================================
// Classification
// =============================================================

#[test]
fn from_status_maps_auth_classes() {
    assert!(matches!(ApiError::from_status(401, "{}"), ApiError::Unauthorized(_)));
    assert!(matches!(ApiError::from_status(403, "{}"), ApiError::Forbidden(_)));
    assert!(matches!(ApiError::from_status(404, "{}"), ApiError::NotFound(_)));
}

#[test]
fn from_status_keeps_backend_message() {
    let err = ApiError::from_status(400, r#"{"detail":"End date must be after start"}"#);
    assert_eq!(
        err,
        ApiError::Api { status: 400, message: "End date must be after start".to_owned() }
    );
    assert_eq!(err.user_message(), "End date must be after start");
}

#[test]
fn from_status_uses_default_for_server_errors() {
    let err = ApiError::from_status(503, "");
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.user_message(), "The server had a problem. Try again shortly.");
}

#[test]
fn status_is_none_for_transport_errors() {
    assert_eq!(ApiError::Timeout.status(), None);
    assert_eq!(ApiError::Connection("reset".to_owned()).status(), None);
}

#[test]
fn retryable_only_for_transient_failures() {
    assert!(ApiError::Timeout.is_retryable());
    assert!(ApiError::Connection("x".to_owned()).is_retryable());
    assert!(ApiError::from_status(500, "").is_retryable());
    assert!(!ApiError::from_status(400, "").is_retryable());
    assert!(!ApiError::from_status(401, "").is_retryable());
    assert!(!ApiError::from_status(403, "").is_retryable());
    assert!(!ApiError::from_status(404, "").is_retryable());
}

#[test]
fn unauthorized_has_sign_in_fallback() {
    let err = ApiError::from_status(401, "not json");
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message(), "Please sign in again.");
}
