//! Resolution of the per-user NetworkCloud data directory.
//!
//! Lookup order for [`ControlPaths::detect`]:
//! 1. `NETWORKCLOUD_DATA_ROOT` environment variable (explicit override)
//! 2. `APPDATA`, the root the background service writes its token under
//!
//! There is no platform fallback: without a data root the token cannot be
//! found, so detection fails with a configuration error instead of guessing.
//! Tests and embedders should prefer [`ControlPaths::from_data_root`].

use crate::error::ControlError;

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use log::{debug, info};

pub const DATA_ROOT_OVERRIDE_ENV: &str = "NETWORKCLOUD_DATA_ROOT";
pub const DATA_ROOT_ENV: &str = "APPDATA";

const APP_DIR_NAME: &str = "NetworkCloud";
const TOKEN_FILE_NAME: &str = ".control_token";
const GROUPS_FILE_NAME: &str = "adapter_groups.json";

/// Locations of the files control-core reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlPaths {
    /// `<data root>/NetworkCloud`.
    pub app_dir: PathBuf,
    /// Control token written by the background service.
    pub token_file: PathBuf,
    /// Locally persisted adapter groups.
    pub groups_file: PathBuf,
    /// How the data root was determined.
    pub source: PathSource,
}

/// How the data root was determined (for logging).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    /// Passed in by the caller.
    Explicit,
    /// Set via `NETWORKCLOUD_DATA_ROOT`.
    EnvOverride,
    /// Taken from `APPDATA`.
    AppData,
}

impl std::fmt::Display for PathSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSource::Explicit => write!(f, "explicit"),
            PathSource::EnvOverride => write!(f, "{DATA_ROOT_OVERRIDE_ENV}"),
            PathSource::AppData => write!(f, "{DATA_ROOT_ENV}"),
        }
    }
}

impl ControlPaths {
    /// Build paths under an explicitly supplied data root.
    pub fn from_data_root(data_root: impl AsRef<Path>) -> Self {
        Self::with_source(data_root.as_ref(), PathSource::Explicit)
    }

    /// Detect the data root from the process environment.
    ///
    /// # Errors
    /// Returns [`ControlError::Configuration`] if neither variable is set (or
    /// both are empty).
    pub fn detect() -> Result<Self, ControlError> {
        if let Some(root) = non_empty_var(DATA_ROOT_OVERRIDE_ENV) {
            info!("Using {DATA_ROOT_OVERRIDE_ENV} override: {root:?}");
            return Ok(Self::with_source(Path::new(&root), PathSource::EnvOverride));
        }

        if let Some(root) = non_empty_var(DATA_ROOT_ENV) {
            debug!("Using {DATA_ROOT_ENV} data root: {root:?}");
            return Ok(Self::with_source(Path::new(&root), PathSource::AppData));
        }

        Err(ControlError::configuration(format!(
            "{DATA_ROOT_ENV} is not set. Set {DATA_ROOT_ENV} or {DATA_ROOT_OVERRIDE_ENV} to the NetworkCloud data root."
        )))
    }

    fn with_source(data_root: &Path, source: PathSource) -> Self {
        let app_dir = data_root.join(APP_DIR_NAME);
        Self {
            token_file: app_dir.join(TOKEN_FILE_NAME),
            groups_file: app_dir.join(GROUPS_FILE_NAME),
            app_dir,
            source,
        }
    }
}

fn non_empty_var(name: &str) -> Option<OsString> {
    env::var_os(name).filter(|value| !value.is_empty())
}
