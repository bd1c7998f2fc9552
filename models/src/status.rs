use serde::{Deserialize, Serialize};

/// Current state of the background service, as reported by `GET /status`.
///
/// Produced fresh on every query; nothing in the client caches it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatusSnapshot {
    /// Service lifecycle state (e.g. "running", "stopped").
    pub state: String,
    pub linked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_uuid: Option<String>,
    /// Timestamp of the last successful link, verbatim from the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obtained_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
