use crate::error::ControlError;
use crate::{CONTROL_BASE_URL, CONTROL_TOKEN_HEADER};

use std::time::Duration;

use reqwest::header::HeaderName;
use url::Url;

/// Connection settings for the control channel.
///
/// The defaults target the background service's fixed loopback address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlConfig {
    pub base_url: String,
    pub token_header: String,
    /// `None` waits for the service indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            base_url: CONTROL_BASE_URL.to_string(),
            token_header: CONTROL_TOKEN_HEADER.to_string(),
            request_timeout: None,
        }
    }
}

impl ControlConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::Configuration`] if:
    /// - `base_url` does not parse or is not `http`/`https`
    /// - `token_header` is not a valid header name
    /// - `request_timeout` is zero
    pub fn validate(&self) -> Result<(), ControlError> {
        let url = Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ControlError::configuration(format!(
                "Invalid control URL scheme: {}",
                self.base_url
            )));
        }

        if HeaderName::from_bytes(self.token_header.as_bytes()).is_err() {
            return Err(ControlError::configuration(format!(
                "Invalid token header name: {:?}",
                self.token_header
            )));
        }

        if self.request_timeout == Some(Duration::ZERO) {
            return Err(ControlError::configuration(
                "request_timeout must be greater than zero",
            ));
        }

        Ok(())
    }
}
