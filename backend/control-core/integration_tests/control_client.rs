use crate::helpers::{NoContentType, TEST_TOKEN, TestContext, unused_loopback_url, write_token};

use control_core::{ControlConfig, ControlError, NetworkCloudApi};

use std::time::Duration;

use reqwest::Method;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Every request carries the control token in the custom header.
///
/// **BUG THIS CATCHES**: Switching to `Authorization: Bearer` or dropping the header
/// would make the real service answer 401 for every call.
#[tokio::test]
async fn given_token_file_when_requesting_then_sends_custom_token_header() {
    // GIVEN: A stub that only answers when the header matches
    let ctx = TestContext::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .and(header("X-Control-Token", TEST_TOKEN))
        .and(NoContentType)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"state": "running"})))
        .expect(1)
        .mount(&ctx.server)
        .await;

    // WHEN: Querying status
    let status = ctx.api.status().await.unwrap();

    // THEN: The authenticated request was served
    assert_eq!(status.state, "running");
}

/// **VALUE**: N calls perform N token reads; a rotated token is used immediately.
///
/// **WHY THIS MATTERS**: The service rotates its token on restart. A cached token
/// would keep failing with 403 until the client itself restarted.
#[tokio::test]
async fn given_token_rotated_between_calls_when_requesting_then_second_call_uses_new_token() {
    // GIVEN: Stubs accepting the old token once and the new token once
    let ctx = TestContext::start().await;
    write_token(&ctx.paths, "old-token");
    Mock::given(path("/status"))
        .and(header("X-Control-Token", "old-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"state": "old"})))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(path("/status"))
        .and(header("X-Control-Token", "new-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"state": "new"})))
        .expect(1)
        .mount(&ctx.server)
        .await;

    // WHEN: Calling, rotating the token file, calling again
    let first = ctx.api.status().await.unwrap();
    write_token(&ctx.paths, "new-token");
    let second = ctx.api.status().await.unwrap();

    // THEN: Each call used the token on disk at the time
    assert_eq!(first.state, "old");
    assert_eq!(second.state, "new");
}

#[tokio::test]
async fn given_payload_when_requesting_then_sends_json_body_and_content_type() {
    let ctx = TestContext::start().await;
    let payload = json!({"adapter": "Ethernet", "enabled": true});
    Mock::given(method("POST"))
        .and(path("/echo"))
        .and(header("content-type", "application/json"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let response: Value = ctx
        .api
        .control()
        .request(Method::POST, "/echo", Some(&payload))
        .await
        .unwrap();

    assert_eq!(response["ok"], true);
}

/// **VALUE**: A 403 surfaces as ControlApi carrying 403, with the body ignored.
#[tokio::test]
async fn given_403_response_when_requesting_then_returns_control_api_error_with_status() {
    let ctx = TestContext::start().await;
    Mock::given(path("/status"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"error": "bad token"})))
        .mount(&ctx.server)
        .await;

    let result = ctx.api.status().await;

    match result {
        Err(err @ ControlError::ControlApi { .. }) => {
            assert_eq!(err.status_code(), Some(403));
            assert!(!err.to_string().contains("bad token"));
        }
        other => panic!("Expected ControlApi error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_500_with_valid_body_when_requesting_then_still_control_api_error() {
    let ctx = TestContext::start().await;
    Mock::given(path("/network"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"adapters": []})))
        .mount(&ctx.server)
        .await;

    let err = ctx.api.get_network().await.unwrap_err();

    assert_eq!(err.status_code(), Some(500));
}

/// **VALUE**: A 200 with an undecodable body is a Serialization error, not success.
#[tokio::test]
async fn given_200_with_undecodable_body_when_requesting_then_returns_serialization_error() {
    let ctx = TestContext::start().await;
    Mock::given(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&ctx.server)
        .await;

    let result = ctx.api.status().await;

    assert!(
        matches!(result, Err(ControlError::Serialization { .. })),
        "got {result:?}"
    );
}

/// **VALUE**: A JSON array is not a response object, even though lenient
/// struct decoding would otherwise accept it.
///
/// **BUG THIS CATCHES**: `[]` decoding into an all-default snapshot, or a
/// positional array filling link fields, would report success for garbage.
#[tokio::test]
async fn given_200_with_json_array_body_when_requesting_then_returns_serialization_error() {
    let ctx = TestContext::start().await;
    Mock::given(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&ctx.server)
        .await;
    Mock::given(path("/link/start"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"["https://x/y","ABCD",900,5]"#),
        )
        .mount(&ctx.server)
        .await;

    let status = ctx.api.status().await;
    let start = ctx.api.start_link().await;

    assert!(
        matches!(status, Err(ControlError::Serialization { .. })),
        "got {status:?}"
    );
    assert!(
        matches!(start, Err(ControlError::Serialization { .. })),
        "got {start:?}"
    );
}

#[tokio::test]
async fn given_204_with_empty_body_when_requesting_then_returns_serialization_error() {
    let ctx = TestContext::start().await;
    Mock::given(path("/stop"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&ctx.server)
        .await;

    let result = ctx.api.stop_service().await;

    assert!(matches!(result, Err(ControlError::Serialization { .. })));
}

/// **VALUE**: "Service not running" is Transport, never ControlApi.
///
/// **WHY THIS MATTERS**: The presentation layer offers to start the service on
/// Transport errors and shows a rejection message on ControlApi errors. Mixing them
/// up sends the user down the wrong path.
#[tokio::test]
async fn given_no_service_listening_when_requesting_then_returns_transport_error() {
    // GIVEN: A client pointed at a closed loopback port
    let ctx = TestContext::start().await;
    let config = ControlConfig::default().with_base_url(unused_loopback_url());
    let api = NetworkCloudApi::new(&ctx.paths, &config).unwrap();

    // WHEN: Querying status
    let result = api.status().await;

    // THEN: Transport error flagged as a connection failure
    match result {
        Err(err @ ControlError::Transport { .. }) => {
            assert!(err.is_service_unavailable());
            assert_eq!(err.status_code(), None);
            assert_eq!(err.error_category(), "connection");
        }
        other => panic!("Expected Transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_missing_token_when_requesting_then_fails_before_any_http_call() {
    let ctx = TestContext::start().await;
    std::fs::remove_file(&ctx.paths.token_file).unwrap();
    Mock::given(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let result = ctx.api.status().await;

    assert!(matches!(result, Err(ControlError::Io { .. })), "got {result:?}");
}

#[tokio::test]
async fn given_token_with_newline_inside_when_requesting_then_configuration_error() {
    let ctx = TestContext::start().await;
    write_token(&ctx.paths, "abc\ndef");

    let result = ctx.api.status().await;

    assert!(
        matches!(result, Err(ControlError::Configuration { .. })),
        "got {result:?}"
    );
}

#[tokio::test]
async fn given_slow_service_and_timeout_when_requesting_then_transport_timeout() {
    let ctx = TestContext::start().await;
    Mock::given(path("/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&ctx.server)
        .await;
    let config = ControlConfig::default()
        .with_base_url(ctx.server.uri())
        .with_request_timeout(Duration::from_millis(100));
    let api = NetworkCloudApi::new(&ctx.paths, &config).unwrap();

    let err = api.status().await.unwrap_err();

    assert!(err.is_service_unavailable());
    assert_eq!(err.error_category(), "timeout");
}
