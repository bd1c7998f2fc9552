use crate::helpers::{TEST_TOKEN, TestContext};

use models::LinkPhase;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: StartLink decodes the device-code payload the service returns.
#[tokio::test]
async fn given_stub_service_when_starting_link_then_returns_user_code_and_interval() {
    // GIVEN: The service starts a pairing attempt
    let ctx = TestContext::start().await;
    Mock::given(method("POST"))
        .and(path("/link/start"))
        .and(header("X-Control-Token", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "verificationUri": "https://x/y",
            "userCode": "ABCD-1234",
            "expiresIn": 900,
            "interval": 5
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    // WHEN: Starting the link
    let start = ctx.api.start_link().await.unwrap();

    // THEN: Code, URI, expiry and poll interval are forwarded
    assert_eq!(start.user_code, "ABCD-1234");
    assert_eq!(start.interval, 5);
    assert_eq!(start.expires_in, 900);
    assert_eq!(start.verification_uri, "https://x/y");
}

/// **VALUE**: The client re-derives link state from every response.
///
/// **WHY THIS MATTERS**: Pairing state lives on the service. Two polls that get
/// different answers must report different phases; nothing is remembered client-side.
#[tokio::test]
async fn given_successive_polls_when_server_state_changes_then_each_poll_reflects_server() {
    let ctx = TestContext::start().await;
    Mock::given(method("POST"))
        .and(path("/link/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "pending"})))
        .up_to_n_times(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/link/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "linked"})))
        .mount(&ctx.server)
        .await;

    let first = ctx.api.link_status().await.unwrap();
    let second = ctx.api.link_status().await.unwrap();

    assert_eq!(first.phase(), LinkPhase::Pending);
    assert_eq!(second.phase(), LinkPhase::Linked);
}

#[tokio::test]
async fn given_unknown_server_status_when_polling_then_forwarded_verbatim() {
    let ctx = TestContext::start().await;
    Mock::given(path("/link/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "slow_down",
            "error": "polling too fast"
        })))
        .mount(&ctx.server)
        .await;

    let status = ctx.api.link_status().await.unwrap();

    assert_eq!(status.status, "slow_down");
    assert_eq!(status.error.as_deref(), Some("polling too fast"));
    assert!(!status.phase().is_terminal());
}

#[tokio::test]
async fn given_linked_agent_when_unlinking_then_posts_unlink() {
    let ctx = TestContext::start().await;
    Mock::given(method("POST"))
        .and(path("/unlink"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "unlinked",
            "message": "Agent identity removed"
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let result = ctx.api.unlink().await.unwrap();

    assert_eq!(result.status, "unlinked");
    assert_eq!(result.message.as_deref(), Some("Agent identity removed"));
}

#[tokio::test]
async fn given_expired_pairing_when_polling_then_phase_is_terminal() {
    let ctx = TestContext::start().await;
    Mock::given(path("/link/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "expired"})))
        .mount(&ctx.server)
        .await;

    let status = ctx.api.link_status().await.unwrap();

    assert_eq!(status.phase(), LinkPhase::Expired);
    assert!(status.phase().is_terminal());
}
