//! Test helpers for control channel integration tests.
//!
//! Each test gets its own stub control service (wiremock) and its own temporary
//! data root holding the control token.

use control_core::{ControlConfig, ControlPaths, NetworkCloudApi};

use std::fs;
use std::net::TcpListener;

use tempfile::TempDir;
use wiremock::{Match, MockServer, Request};

pub const TEST_TOKEN: &str = "test-token-12345";

/// A stub control service plus an API client pointed at it.
pub struct TestContext {
    pub server: MockServer,
    pub root: TempDir,
    pub paths: ControlPaths,
    pub api: NetworkCloudApi,
}

impl TestContext {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let root = TempDir::new().expect("Failed to create temp data root");
        let paths = ControlPaths::from_data_root(root.path());
        write_token(&paths, TEST_TOKEN);

        let config = ControlConfig::default().with_base_url(server.uri());
        let api = NetworkCloudApi::new(&paths, &config).expect("Failed to build API client");

        Self {
            server,
            root,
            paths,
            api,
        }
    }
}

/// Write (or rotate) the control token the way the service does.
pub fn write_token(paths: &ControlPaths, token: &str) {
    fs::create_dir_all(&paths.app_dir).expect("Failed to create app dir");
    fs::write(&paths.token_file, format!("{token}\n")).expect("Failed to write token");
}

/// A loopback URL with nothing listening on it.
pub fn unused_loopback_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe listener");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Matches requests that carry no `Content-Type` header.
pub struct NoContentType;

impl Match for NoContentType {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("content-type")
    }
}
