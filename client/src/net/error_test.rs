use super::*;

#[test]
fn from_status_extracts_server_message() {
    let err = ApiError::from_status(400, r#"{"message":"Email already in use"}"#);
    assert_eq!(err, ApiError::Status { status: 400, message: Some("Email already in use".to_owned()) });
    assert_eq!(err.user_message("Failed to create manager"), "Email already in use");
}

#[test]
fn from_status_ignores_non_json_and_blank_messages() {
    assert_eq!(ApiError::from_status(502, "<html>Bad gateway</html>"), ApiError::Status { status: 502, message: None });
    assert_eq!(ApiError::from_status(500, r#"{"message":"  "}"#), ApiError::Status { status: 500, message: None });
}

#[test]
fn user_message_falls_back_for_network_errors() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(err.user_message("Failed to fetch leads"), "Failed to fetch leads");
    assert_eq!(err.status(), None);
}

#[test]
fn display_includes_status_code() {
    assert_eq!(ApiError::from_status(404, "").to_string(), "request failed with status 404");
}
