use crate::helpers::TestContext;

use models::AdapterGroupMap;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn given_linked_service_when_querying_status_then_snapshot_decoded() {
    let ctx = TestContext::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "state": "running",
            "linked": true,
            "agentUuid": "3b6c8f0e-agent",
            "obtainedAt": "2026-10-01T12:00:00Z",
            "message": "ok"
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let status = ctx.api.status().await.unwrap();

    assert!(status.linked);
    assert_eq!(status.agent_uuid.as_deref(), Some("3b6c8f0e-agent"));
    assert_eq!(status.obtained_at.as_deref(), Some("2026-10-01T12:00:00Z"));
    assert_eq!(status.message.as_deref(), Some("ok"));
}

#[tokio::test]
async fn given_service_commands_when_invoked_then_post_to_start_and_stop() {
    let ctx = TestContext::start().await;
    Mock::given(method("POST"))
        .and(path("/stop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "stopping"})))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "starting"})))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let stopped = ctx.api.stop_service().await.unwrap();
    let started = ctx.api.start_service().await.unwrap();

    assert_eq!(stopped.status, "stopping");
    assert_eq!(started.status, "starting");
}

#[tokio::test]
async fn given_log_lines_when_tailing_then_lines_returned_in_order() {
    let ctx = TestContext::start().await;
    Mock::given(method("GET"))
        .and(path("/logs/tail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "lines": ["service started", "link pending", "link ok"]
        })))
        .mount(&ctx.server)
        .await;

    let logs = ctx.api.tail_logs().await.unwrap();

    assert_eq!(logs.lines, vec!["service started", "link pending", "link ok"]);
}

#[tokio::test]
async fn given_no_log_lines_when_tailing_then_empty() {
    let ctx = TestContext::start().await;
    Mock::given(path("/logs/tail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&ctx.server)
        .await;

    let logs = ctx.api.tail_logs().await.unwrap();

    assert!(logs.lines.is_empty());
}

#[tokio::test]
async fn given_adapters_when_fetching_network_then_primary_and_list_decoded() {
    let ctx = TestContext::start().await;
    let ethernet = json!({
        "name": "Ethernet",
        "description": "Realtek PCIe GbE",
        "type": "ethernet",
        "macAddress": "AA:BB:CC:DD:EE:FF",
        "connected": true,
        "dhcpEnabled": true,
        "ipv4Address": "10.0.0.5",
        "dnsServers": ["10.0.0.1"]
    });
    Mock::given(method("GET"))
        .and(path("/network"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "primary": ethernet,
            "adapters": [ethernet]
        })))
        .mount(&ctx.server)
        .await;

    let network = ctx.api.get_network().await.unwrap();

    assert_eq!(network.adapters.len(), 1);
    assert_eq!(network.primary.as_ref(), network.adapters.first());
    assert_eq!(network.adapters[0].dns_servers, vec!["10.0.0.1"]);
}

/// **VALUE**: Group storage works with the service down; it never touches HTTP.
#[tokio::test]
async fn given_groups_saved_through_api_when_loaded_then_round_trip_without_http() {
    let ctx = TestContext::start().await;
    let mut groups = AdapterGroupMap::new();
    groups.insert(String::from("AA:BB:CC:DD:EE:FF"), String::from("Office"));

    ctx.api.save_groups(&groups).unwrap();
    let loaded = ctx.api.load_groups().unwrap();

    assert_eq!(loaded, groups);
    assert!(ctx.root.path().join("NetworkCloud/adapter_groups.json").exists());
    assert!(ctx.server.received_requests().await.unwrap().is_empty());
}
