//! Error taxonomy for every control-core operation.
//!
//! Each variant answers a different question for the presentation layer:
//! - `Configuration`: a required setting (data root, base URL) is missing or invalid
//! - `Io`: the token or groups file could not be read or written
//! - `Serialization`: JSON could not be encoded or decoded
//! - `Transport`: the control service is unreachable (usually: not running)
//! - `ControlApi`: the service answered with a non-2xx status
//!
//! All variants include an `ErrorLocation` captured with `#[track_caller]`.

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;
use std::path::{Path, PathBuf};

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ControlError {
    #[error("Configuration Error: {message} {location}")]
    Configuration {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO Error: {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Serialization Error: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("Control API Error: HTTP {status_code} {location}")]
    ControlApi {
        status_code: HttpStatusCode,
        location: ErrorLocation,
    },
}

impl ControlError {
    #[track_caller]
    pub fn configuration(message: impl Into<String>) -> Self {
        ControlError::Configuration {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        ControlError::Io {
            path: path.as_ref().to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn serialization(message: impl Into<String>) -> Self {
        ControlError::Serialization {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn control_api(status_code: u16) -> Self {
        ControlError::ControlApi {
            status_code: HttpStatusCode(status_code),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create from a reqwest error raised while sending or reading a response.
    ///
    /// Inspects the error kind BEFORE converting to string.
    #[track_caller]
    pub fn from_reqwest(error: &reqwest::Error) -> Self {
        ControlError::Transport {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True when the service could not be reached at all, as opposed to
    /// reached-and-refused.
    pub fn is_service_unavailable(&self) -> bool {
        matches!(self, ControlError::Transport { .. })
    }

    /// Get error category for logging and exit-code mapping.
    pub fn error_category(&self) -> &'static str {
        match self {
            ControlError::Configuration { .. } => "configuration",
            ControlError::Io { .. } => "io",
            ControlError::Serialization { .. } => "serialization",
            ControlError::Transport { is_timeout: true, .. } => "timeout",
            ControlError::Transport { is_connection: true, .. } => "connection",
            ControlError::Transport { .. } => "transport",
            ControlError::ControlApi { status_code, .. } if status_code.is_auth_rejected() => {
                "unauthorized"
            }
            ControlError::ControlApi { status_code, .. } if status_code.is_server_error() => {
                "service_error"
            }
            ControlError::ControlApi { status_code, .. } if status_code.is_client_error() => {
                "rejected"
            }
            ControlError::ControlApi { .. } => "control_api",
        }
    }

    /// HTTP status code, for `ControlApi` errors only.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ControlError::ControlApi { status_code, .. } => Some(status_code.0),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ControlError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ControlError::Serialization {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for ControlError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ControlError::Configuration {
            message: format!("Invalid control URL: {error}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ControlError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ControlError::from_reqwest(&error)
    }
}
