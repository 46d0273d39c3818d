use super::*;

// =========================================================
// Helpers
// =========================================================

fn status_error(status: u16) -> ApiError {
    ApiError::Status {
        status,
        message: None,
    }
}

// =========================================================
// Origin policy
// =========================================================

#[test]
fn test_origin_for_localhost_uses_dev_backend() {
    assert_eq!(
        origin_for("localhost", "http://localhost:3000"),
        "http://localhost:9090"
    );
}

#[test]
fn test_origin_for_loopback_ip_uses_dev_backend() {
    assert_eq!(
        origin_for("127.0.0.1", "http://127.0.0.1:3000"),
        "http://localhost:9090"
    );
}

#[test]
fn test_origin_for_production_host_uses_page_origin() {
    assert_eq!(
        origin_for("auction.example.com", "https://auction.example.com"),
        "https://auction.example.com"
    );
}

// =========================================================
// URL joining
// =========================================================

#[test]
fn test_url_joins_with_leading_slash() {
    let api = ApiClient::new("http://localhost:9090".to_string());
    assert_eq!(api.url("/items"), "http://localhost:9090/items");
}

#[test]
fn test_url_joins_without_leading_slash() {
    let api = ApiClient::new("http://localhost:9090".to_string());
    assert_eq!(api.url("items"), "http://localhost:9090/items");
}

#[test]
fn test_new_trims_trailing_slash() {
    let api = ApiClient::new("http://localhost:9090/".to_string());
    assert_eq!(api.base_url(), "http://localhost:9090");
    assert_eq!(api.url("/login"), "http://localhost:9090/login");
}

// =========================================================
// Failure classification
// =========================================================

#[test]
fn test_kind_400_is_session_invalid() {
    assert_eq!(status_error(400).kind(), FailureKind::SessionInvalid);
}

#[test]
fn test_kind_401_is_session_invalid() {
    assert_eq!(status_error(401).kind(), FailureKind::SessionInvalid);
}

#[test]
fn test_kind_other_statuses_are_server_rejections() {
    for status in [403, 404, 409, 500, 503] {
        assert_eq!(status_error(status).kind(), FailureKind::ServerRejection);
    }
}

#[test]
fn test_kind_no_response_is_connectivity() {
    let err = ApiError::NoResponse("fetch aborted".to_string());
    assert_eq!(err.kind(), FailureKind::Connectivity);
}

#[test]
fn test_kind_build_failure_is_connectivity() {
    let err = ApiError::BuildFailed("bad body".to_string());
    assert_eq!(err.kind(), FailureKind::Connectivity);
}

#[test]
fn test_status_accessor() {
    assert_eq!(status_error(500).status(), Some(500));
    assert_eq!(ApiError::NoResponse(String::new()).status(), None);
}

// =========================================================
// Error payload parsing
// =========================================================

#[test]
fn test_error_message_parses_error_payload() {
    let body = r#"{"error": "User already exists"}"#;
    assert_eq!(error_message(body), Some("User already exists".to_string()));
}

#[test]
fn test_error_message_ignores_other_shapes() {
    assert_eq!(error_message("plain text"), None);
    assert_eq!(error_message(r#"{"detail": "nope"}"#), None);
    assert_eq!(error_message(""), None);
}

// =========================================================
// Display
// =========================================================

#[test]
fn test_display_includes_status_and_message() {
    let err = ApiError::Status {
        status: 400,
        message: Some("Invalid data provided".to_string()),
    };
    assert_eq!(err.to_string(), "server returned 400: Invalid data provided");
    assert_eq!(status_error(503).to_string(), "server returned 503");
}
