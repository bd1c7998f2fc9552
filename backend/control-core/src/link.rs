//! Device-linking operations.
//!
//! The pairing state machine runs inside the background service. These calls
//! expose its transitions and nothing else: no state is kept between calls,
//! and polling cadence, expiry and cancellation belong to the caller (see
//! [`LinkStartResponse::interval`] and [`LinkStartResponse::expires_in`]).

use crate::control_client::ControlClient;
use crate::error::ControlError;

use models::{LinkStartResponse, LinkStatusResponse};

use reqwest::Method;

pub const LINK_START_ENDPOINT: &str = "/link/start";
pub const LINK_STATUS_ENDPOINT: &str = "/link/status";
pub const UNLINK_ENDPOINT: &str = "/unlink";

impl ControlClient {
    /// Ask the service to begin a pairing attempt.
    pub async fn start_link(&self) -> Result<LinkStartResponse, ControlError> {
        self.send(Method::POST, LINK_START_ENDPOINT).await
    }

    /// Current status of the pairing attempt, as the service sees it.
    ///
    /// The status string is forwarded unvalidated.
    pub async fn poll_link_status(&self) -> Result<LinkStatusResponse, ControlError> {
        self.send(Method::POST, LINK_STATUS_ENDPOINT).await
    }

    /// Tear down the paired identity on the service side.
    pub async fn unlink(&self) -> Result<LinkStatusResponse, ControlError> {
        self.send(Method::POST, UNLINK_ENDPOINT).await
    }
}
