//! Device-linking (pairing) responses.
//!
//! The pairing flow is owned by the service. These types only carry what it
//! reports; the client holds no pairing state between calls.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Returned by `POST /link/start`: what the user needs to finish pairing out-of-band.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkStartResponse {
    /// Page the user visits to approve this device.
    pub verification_uri: String,
    /// Human-facing code the user enters at `verification_uri`.
    pub user_code: String,
    /// Seconds until `user_code` stops being accepted.
    pub expires_in: u64,
    /// Recommended seconds between `POST /link/status` polls.
    pub interval: u64,
}

/// Returned by `POST /link/status`, `POST /unlink`, `POST /start` and `POST /stop`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkStatusResponse {
    /// Server-defined status string, forwarded as-is.
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LinkStatusResponse {
    pub fn phase(&self) -> LinkPhase {
        LinkPhase::from(self.status.as_str())
    }
}

/// Classification of a server-reported link status.
///
/// Unrecognized values are kept in [`LinkPhase::Other`] rather than rejected:
/// the service may introduce new states at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkPhase {
    Pending,
    Linked,
    Denied,
    Expired,
    Error,
    Other(String),
}

impl LinkPhase {
    /// Whether a caller polling the link status should stop.
    ///
    /// `Other` is not terminal; an unknown state is treated as still in progress.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            LinkPhase::Linked | LinkPhase::Denied | LinkPhase::Expired | LinkPhase::Error
        )
    }
}

impl From<&str> for LinkPhase {
    fn from(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "pending" => LinkPhase::Pending,
            "linked" => LinkPhase::Linked,
            "denied" => LinkPhase::Denied,
            "expired" => LinkPhase::Expired,
            "error" => LinkPhase::Error,
            _ => LinkPhase::Other(status.to_string()),
        }
    }
}

impl fmt::Display for LinkPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkPhase::Pending => write!(f, "pending"),
            LinkPhase::Linked => write!(f, "linked"),
            LinkPhase::Denied => write!(f, "denied"),
            LinkPhase::Expired => write!(f, "expired"),
            LinkPhase::Error => write!(f, "error"),
            LinkPhase::Other(status) => write!(f, "{status}"),
        }
    }
}
