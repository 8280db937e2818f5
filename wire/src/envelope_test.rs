use super::*;

#[derive(Debug, PartialEq, Deserialize)]
struct Sample {
    value: u32,
}

// =============================================================
// Success path
// =============================================================

#[test]
fn decode_response_returns_message_and_data() {
    let body = br#"{"success":true,"message":"ok","data":{"value":7}}"#;
    let reply = decode_response::<Sample>(200, body).unwrap();
    assert_eq!(reply.message, "ok");
    assert_eq!(reply.data, Sample { value: 7 });
}

#[test]
fn decode_response_accepts_missing_data_for_unit() {
    let body = br#"{"success":true,"message":"Logged out"}"#;
    let reply = decode_response::<()>(200, body).unwrap();
    assert_eq!(reply.message, "Logged out");
}

#[test]
fn decode_response_reports_shape_mismatch_as_decode() {
    let body = br#"{"success":true,"message":"ok","data":{"value":"seven"}}"#;
    let err = decode_response::<Sample>(200, body).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

// =============================================================
// Failure categories
// =============================================================

#[test]
fn array_error_becomes_validation() {
    let body = br#"{"success":false,"error":[{"field":"email","message":"Email is invalid"},{"path":"password","msg":"Too short"}]}"#;
    let err = decode_response::<Sample>(400, body).unwrap_err();
    assert_eq!(
        err,
        ApiError::Validation(vec![
            FieldError { field: Some("email".to_owned()), message: "Email is invalid".to_owned() },
            FieldError { field: Some("password".to_owned()), message: "Too short".to_owned() },
        ])
    );
}

#[test]
fn string_error_becomes_application() {
    let body = br#"{"success":false,"message":"Bad request","error":"Invalid credentials"}"#;
    let err = decode_response::<Sample>(401, body).unwrap_err();
    assert_eq!(err, ApiError::Application("Invalid credentials".to_owned()));
}

#[test]
fn missing_error_falls_back_to_message() {
    let body = br#"{"success":false,"message":"Order not found"}"#;
    let err = decode_response::<Sample>(404, body).unwrap_err();
    assert_eq!(err, ApiError::Application("Order not found".to_owned()));
}

#[test]
fn empty_failure_gets_generic_message() {
    let body = br#"{"success":false}"#;
    let err = decode_response::<Sample>(500, body).unwrap_err();
    assert_eq!(err, ApiError::Application("request failed".to_owned()));
}

#[test]
fn malformed_validation_array_falls_back_to_message() {
    let body = br#"{"success":false,"message":"Rejected","error":[1,2]}"#;
    let err = decode_response::<Sample>(422, body).unwrap_err();
    assert_eq!(err, ApiError::Application("Rejected".to_owned()));
}

#[test]
fn non_json_success_status_is_network_failure() {
    let err = decode_response::<Sample>(200, b"<html>gateway</html>").unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[test]
fn non_json_error_status_is_network_failure_with_status_code() {
    let err = decode_response::<Sample>(502, b"<html>Bad Gateway</html>").unwrap_err();
    let ApiError::Network(message) = &err else {
        panic!("expected a network error, got {err:?}");
    };
    assert!(message.contains("502"), "{message}");
    assert_eq!(err.summary(), "Unable to connect to server. Please try again.");
}

// =============================================================
// Presentation helpers
// =============================================================

#[test]
fn summary_hides_network_details() {
    let err = ApiError::Network("dns lookup failed".to_owned());
    assert_eq!(err.summary(), "Unable to connect to server. Please try again.");
}

#[test]
fn summary_joins_field_messages() {
    let err = ApiError::Validation(vec![
        FieldError { field: None, message: "a".to_owned() },
        FieldError { field: None, message: "b".to_owned() },
    ]);
    assert_eq!(err.summary(), "a; b");
    assert_eq!(err.to_string(), "validation failed: a; b");
}

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc"), "Bearer abc");
}
