use crate::StatusSnapshot;

#[test]
fn given_linked_status_json_when_decoded_then_identity_present() {
    let json = r#"{"state":"running","linked":true,"agentUuid":"7f1c","obtainedAt":"2026-01-02T03:04:05Z"}"#;

    let status: StatusSnapshot = serde_json::from_str(json).unwrap();

    assert_eq!(status.state, "running");
    assert!(status.linked);
    assert_eq!(status.agent_uuid.as_deref(), Some("7f1c"));
    assert_eq!(status.obtained_at.as_deref(), Some("2026-01-02T03:04:05Z"));
    assert!(status.message.is_none());
}

/// **VALUE**: The service omits empty fields, so a bare `{}` must still decode.
#[test]
fn given_empty_object_when_decoded_then_defaults_apply() {
    let status: StatusSnapshot = serde_json::from_str("{}").unwrap();

    assert_eq!(status, StatusSnapshot::default());
    assert!(!status.linked);
}

#[test]
fn given_non_object_body_when_decoded_then_fails() {
    let result = serde_json::from_str::<StatusSnapshot>(r#""running""#);

    assert!(result.is_err());
}
