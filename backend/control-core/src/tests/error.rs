use crate::error::ControlError;

use std::error::Error;
use std::io::{Error as IoError, ErrorKind};

/// **VALUE**: ControlApi errors expose the numeric status and nothing else.
///
/// **WHY THIS MATTERS**: The presentation layer decides between "token rejected" and
/// "service error" purely from this code.
#[test]
fn given_control_api_error_when_inspected_then_exposes_status_code() {
    let err = ControlError::control_api(403);

    assert_eq!(err.status_code(), Some(403));
    assert_eq!(err.error_category(), "unauthorized");
    assert!(!err.is_service_unavailable());
    assert!(err.to_string().contains("HTTP 403"));
}

#[test]
fn given_non_api_errors_when_status_code_requested_then_none() {
    assert_eq!(ControlError::configuration("x").status_code(), None);
    assert_eq!(ControlError::serialization("x").status_code(), None);
}

#[test]
fn given_server_error_status_when_categorized_then_service_error() {
    assert_eq!(ControlError::control_api(500).error_category(), "service_error");
    assert_eq!(ControlError::control_api(503).error_category(), "service_error");
}

/// **VALUE**: 4xx other than 401/403 is the service refusing the request itself.
#[test]
fn given_client_error_status_when_categorized_then_rejected() {
    assert_eq!(ControlError::control_api(400).error_category(), "rejected");
    assert_eq!(ControlError::control_api(404).error_category(), "rejected");
}

#[test]
fn given_non_error_status_when_categorized_then_control_api() {
    assert_eq!(ControlError::control_api(302).error_category(), "control_api");
}

#[test]
fn given_io_error_when_inspected_then_preserves_source_chain_and_path() {
    // GIVEN: An IO error for the token file
    let err = ControlError::io(
        "/data/NetworkCloud/.control_token",
        IoError::new(ErrorKind::NotFound, "no such file"),
    );

    // WHEN: Inspecting message and source
    let message = err.to_string();
    let source = err.source();

    // THEN: Path, underlying error and location are all present
    assert!(message.contains(".control_token"));
    assert!(message.contains("error.rs"), "Should include location: {message}");
    assert!(source.is_some());
    assert!(source.unwrap().to_string().contains("no such file"));
    assert_eq!(err.error_category(), "io");
}

#[test]
fn given_serde_error_when_converted_then_serialization_variant() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();

    let err = ControlError::from(serde_err);

    assert!(matches!(err, ControlError::Serialization { .. }));
}

#[test]
fn given_url_parse_error_when_converted_then_configuration_variant() {
    let parse_err = url::Url::parse("http://[::1").unwrap_err();

    let err = ControlError::from(parse_err);

    assert!(matches!(err, ControlError::Configuration { .. }));
}
