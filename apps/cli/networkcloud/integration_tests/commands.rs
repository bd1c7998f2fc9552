use networkcloud::build_api;
use networkcloud::cli::Cli;
use networkcloud::commands::execute;
use networkcloud::error::{CliError, exit_code};

use control_core::NetworkCloudApi;

use std::fs;

use clap::Parser;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Integration tests: CLI command dispatch against a stub control service
// ============================================================================

const TOKEN: &str = "cli-test-token";

struct Harness {
    server: MockServer,
    root: TempDir,
}

impl Harness {
    async fn start() -> Self {
        let server = MockServer::start().await;
        let root = TempDir::new().unwrap();
        let app_dir = root.path().join("NetworkCloud");
        fs::create_dir_all(&app_dir).unwrap();
        fs::write(app_dir.join(".control_token"), TOKEN).unwrap();
        Self { server, root }
    }

    fn cli(&self, args: &[&str]) -> Cli {
        let root = self.root.path().to_string_lossy().to_string();
        let uri = self.server.uri();
        let mut argv = vec!["networkcloud", "--base-url", uri.as_str(), "--data-root", root.as_str()];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn api(&self, cli: &Cli) -> NetworkCloudApi {
        build_api(cli).unwrap()
    }
}

/// **VALUE**: Tests that CLI flags reach the control channel (URL, data root, token).
///
/// **BUG THIS CATCHES**: Would catch if `--data-root` or `--base-url` were parsed but
/// not passed into the API client.
#[tokio::test]
async fn given_cli_flags_when_running_status_then_uses_stub_service_and_token() {
    // GIVEN: A stub service expecting our token
    let harness = Harness::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .and(header("X-Control-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "state": "running",
            "linked": false
        })))
        .expect(1)
        .mount(&harness.server)
        .await;
    let cli = harness.cli(&["status"]);

    // WHEN: Executing the status command
    let output = execute(&harness.api(&cli), &cli.command).await.unwrap();

    // THEN: The service's snapshot is rendered
    assert_eq!(output["state"], "running");
    assert_eq!(output["linked"], false);
}

#[tokio::test]
async fn given_groups_set_then_network_when_running_then_adapters_carry_labels() {
    let harness = Harness::start().await;
    Mock::given(method("GET"))
        .and(path("/network"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "adapters": [
                {"name": "Ethernet", "macAddress": "AA:BB:CC:DD:EE:FF", "connected": true},
                {"name": "Wi-Fi", "macAddress": "11:22:33:44:55:66", "connected": false}
            ]
        })))
        .mount(&harness.server)
        .await;

    let set = harness.cli(&["groups", "set", "AA:BB:CC:DD:EE:FF", "Office"]);
    let saved = execute(&harness.api(&set), &set.command).await.unwrap();
    let network = harness.cli(&["network"]);
    let output = execute(&harness.api(&network), &network.command)
        .await
        .unwrap();

    assert_eq!(saved, json!({"AA:BB:CC:DD:EE:FF": "Office"}));
    assert_eq!(output["adapters"][0]["group"], "Office");
    assert!(output["adapters"][1].get("group").is_none());
    assert!(output.get("primary").is_none());
}

#[tokio::test]
async fn given_groups_remove_when_running_then_entry_deleted_from_file() {
    let harness = Harness::start().await;
    let set = harness.cli(&["groups", "set", "Ethernet", "Office"]);
    execute(&harness.api(&set), &set.command).await.unwrap();

    let remove = harness.cli(&["groups", "remove", "Ethernet"]);
    let output = execute(&harness.api(&remove), &remove.command)
        .await
        .unwrap();

    assert_eq!(output, json!({}));
    let contents =
        fs::read_to_string(harness.root.path().join("NetworkCloud/adapter_groups.json")).unwrap();
    assert_eq!(contents, "{}");
}

#[tokio::test]
async fn given_blank_label_when_setting_group_then_rejected_without_writing() {
    let harness = Harness::start().await;
    let cli = harness.cli(&["groups", "set", "Ethernet", "  "]);

    let result = execute(&harness.api(&cli), &cli.command).await;

    assert!(matches!(result, Err(CliError::Cli { .. })));
    assert!(!harness.root.path().join("NetworkCloud/adapter_groups.json").exists());
}

/// **VALUE**: The wait loop stops as soon as the service reports a terminal phase.
#[tokio::test]
async fn given_pending_then_linked_when_waiting_then_returns_linked() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/link/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "pending"})))
        .up_to_n_times(1)
        .mount(&harness.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/link/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "linked"})))
        .mount(&harness.server)
        .await;
    let cli = harness.cli(&["link", "wait", "--interval", "1", "--expires-in", "30"]);

    let output = execute(&harness.api(&cli), &cli.command).await.unwrap();

    assert_eq!(output["status"], "linked");
    assert_eq!(harness.server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn given_pairing_never_finishes_when_waiting_then_times_out_with_cli_error() {
    let harness = Harness::start().await;
    Mock::given(path("/link/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "pending"})))
        .mount(&harness.server)
        .await;
    let cli = harness.cli(&["link", "wait", "--interval", "1", "--expires-in", "0"]);

    let result = execute(&harness.api(&cli), &cli.command).await;

    match result {
        Err(CliError::Cli { message, .. }) => assert!(message.contains("pending")),
        other => panic!("Expected Cli error, got {other:?}"),
    }
}

/// **VALUE**: An expiry too large to represent means "no deadline", not a crash.
///
/// **BUG THIS CATCHES**: Adding the expiry to the current instant unchecked panics
/// with an overflow before the first poll.
#[tokio::test]
async fn given_huge_expiry_when_waiting_then_polls_without_overflow() {
    let harness = Harness::start().await;
    Mock::given(path("/link/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "linked"})))
        .mount(&harness.server)
        .await;
    let cli = harness.cli(&["link", "wait", "--expires-in", "18446744073709551615"]);

    let output = execute(&harness.api(&cli), &cli.command).await.unwrap();

    assert_eq!(output["status"], "linked");
}

#[tokio::test]
async fn given_huge_interval_when_waiting_then_gives_up_instead_of_overflowing() {
    let harness = Harness::start().await;
    Mock::given(path("/link/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "pending"})))
        .mount(&harness.server)
        .await;
    let cli = harness.cli(&[
        "link",
        "wait",
        "--interval",
        "18446744073709551615",
        "--expires-in",
        "30",
    ]);

    let result = execute(&harness.api(&cli), &cli.command).await;

    assert!(matches!(result, Err(CliError::Cli { .. })), "got {result:?}");
    assert_eq!(harness.server.received_requests().await.unwrap().len(), 1);
}

/// **VALUE**: `link start --wait` keeps polling when the service sends no timing hints.
///
/// **BUG THIS CATCHES**: A missing `expiresIn` decoded as 0 ended the wait after the
/// first pending poll.
#[tokio::test]
async fn given_start_without_timing_hints_when_waiting_then_polls_until_linked() {
    // GIVEN: A start response with neither interval nor expiresIn, then pending, then linked
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/link/start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "verificationUri": "https://x/y",
            "userCode": "ABCD-1234"
        })))
        .mount(&harness.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/link/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "pending"})))
        .up_to_n_times(1)
        .mount(&harness.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/link/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "linked"})))
        .mount(&harness.server)
        .await;
    let cli = harness.cli(&["link", "start", "--wait"]);

    // WHEN: Starting and waiting
    let output = execute(&harness.api(&cli), &cli.command).await.unwrap();

    // THEN: The default expiry kept the wait alive past the pending poll
    assert_eq!(output["start"]["userCode"], "ABCD-1234");
    assert_eq!(output["result"]["status"], "linked");
}

#[tokio::test]
async fn given_link_start_when_running_without_wait_then_prints_code() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/link/start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "verificationUri": "https://x/y",
            "userCode": "ABCD-1234",
            "expiresIn": 900,
            "interval": 5
        })))
        .mount(&harness.server)
        .await;
    let cli = harness.cli(&["link", "start"]);

    let output = execute(&harness.api(&cli), &cli.command).await.unwrap();

    assert_eq!(output["userCode"], "ABCD-1234");
    assert_eq!(output["interval"], 5);
}

#[tokio::test]
async fn given_service_rejects_token_when_running_then_exit_code_is_rejected() {
    let harness = Harness::start().await;
    Mock::given(path("/logs/tail"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&harness.server)
        .await;
    let cli = harness.cli(&["logs"]);

    let err = execute(&harness.api(&cli), &cli.command).await.unwrap_err();

    assert_eq!(err.exit_code(), exit_code::REJECTED);
}

#[tokio::test]
async fn given_stopped_service_when_running_service_start_then_posts_start() {
    let harness = Harness::start().await;
    Mock::given(method("POST"))
        .and(path("/start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "running"})))
        .expect(1)
        .mount(&harness.server)
        .await;
    let cli = harness.cli(&["service", "start"]);

    let output = execute(&harness.api(&cli), &cli.command).await.unwrap();

    assert_eq!(output["status"], "running");
}
