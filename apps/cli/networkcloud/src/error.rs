use common::ErrorLocation;

use control_core::ControlError;

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Exit codes, following the BSD `sysexits` conventions.
pub mod exit_code {
    pub const FAILURE: u8 = 1;
    pub const DATA_ERROR: u8 = 65;
    pub const SERVICE_UNAVAILABLE: u8 = 69;
    pub const IO_ERROR: u8 = 74;
    pub const REJECTED: u8 = 77;
    pub const CONFIG_ERROR: u8 = 78;
}

/// Errors surfaced by the command-line front end.
///
/// Serialized to stderr as JSON so scripts can tell "service down" from
/// "service refused" without parsing messages.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum CliError {
    /// Invalid usage or a presentation-level failure (e.g. pairing timed out)
    #[error("Cli Error: {message} {location}")]
    Cli {
        message: String,
        location: ErrorLocation,
    },

    /// Error from control-core operations
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        category: &'static str,
        status_code: Option<u16>,
        exit_code: u8,
        location: ErrorLocation,
    },

    /// Logger could not be initialized
    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn cli(message: impl Into<String>) -> Self {
        CliError::Cli {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Core { exit_code, .. } => *exit_code,
            CliError::Cli { .. } | CliError::Logger { .. } => exit_code::FAILURE,
        }
    }
}

impl From<ControlError> for CliError {
    #[track_caller]
    fn from(error: ControlError) -> Self {
        let exit_code = match &error {
            ControlError::Transport { .. } => exit_code::SERVICE_UNAVAILABLE,
            ControlError::ControlApi { .. } => exit_code::REJECTED,
            ControlError::Io { .. } => exit_code::IO_ERROR,
            ControlError::Serialization { .. } => exit_code::DATA_ERROR,
            ControlError::Configuration { .. } => exit_code::CONFIG_ERROR,
        };

        CliError::Core {
            message: error.to_string(),
            category: error.error_category(),
            status_code: error.status_code(),
            exit_code,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        CliError::Cli {
            message: format!("Failed to render output: {error}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
