// Unit tests for CLI error mapping
// Exit codes are the contract scripts rely on

use crate::error::{CliError, exit_code};

use control_core::ControlError;

use std::io::{Error as IoError, ErrorKind};

/// **VALUE**: "Service down" and "service refused" map to different exit codes.
///
/// **WHY THIS MATTERS**: A wrapper script restarts the service on 69 but must not
/// loop restarting it when the token is simply wrong (77).
#[test]
fn given_core_errors_when_converted_then_exit_codes_distinguish_causes() {
    let refused = CliError::from(ControlError::control_api(403));
    let config = CliError::from(ControlError::configuration("APPDATA is not set"));
    let io = CliError::from(ControlError::io(
        "/x/.control_token",
        IoError::new(ErrorKind::NotFound, "missing"),
    ));
    let data = CliError::from(ControlError::serialization("bad body"));

    assert_eq!(refused.exit_code(), exit_code::REJECTED);
    assert_eq!(config.exit_code(), exit_code::CONFIG_ERROR);
    assert_eq!(io.exit_code(), exit_code::IO_ERROR);
    assert_eq!(data.exit_code(), exit_code::DATA_ERROR);
    assert_eq!(CliError::cli("usage").exit_code(), exit_code::FAILURE);
}

#[test]
fn given_control_api_error_when_converted_then_keeps_status_and_category() {
    let err = CliError::from(ControlError::control_api(401));

    match err {
        CliError::Core {
            status_code,
            category,
            ..
        } => {
            assert_eq!(status_code, Some(401));
            assert_eq!(category, "unauthorized");
        }
        other => panic!("Expected Core variant, got {other:?}"),
    }
}

/// **VALUE**: Errors serialize to tagged JSON for stderr.
#[test]
fn given_cli_error_when_serialized_then_tagged_with_variant() {
    let err = CliError::from(ControlError::control_api(500));

    let json = serde_json::to_value(&err).unwrap();

    assert_eq!(json["type"], "Core");
    assert_eq!(json["data"]["status_code"], 500);
    assert_eq!(json["data"]["category"], "service_error");
    assert!(json["data"]["location"]["file"].is_string());
}
