//! Control token access.
//!
//! The background service creates and rotates the token; this side only reads
//! it. Nothing is cached: every control request calls [`TokenStore::load`], so
//! a rotated token takes effect on the very next call.

use crate::error::ControlError;
use crate::paths::ControlPaths;

use common::RedactedToken;

use std::fs;
use std::path::{Path, PathBuf};

use log::{trace, warn};
use zeroize::Zeroizing;

#[derive(Debug, Clone)]
pub struct TokenStore {
    token_file: PathBuf,
}

impl TokenStore {
    pub fn new(paths: &ControlPaths) -> Self {
        Self {
            token_file: paths.token_file.clone(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.token_file
    }

    /// Read the current control token, trimmed of surrounding whitespace.
    ///
    /// # Errors
    /// Returns [`ControlError::Io`] if the file cannot be read. A missing file is
    /// an error too: every control call needs a token.
    pub fn load(&self) -> Result<RedactedToken, ControlError> {
        // The untrimmed read buffer holds the secret too
        let contents = Zeroizing::new(fs::read_to_string(&self.token_file).map_err(|e| {
            warn!("Failed to read control token {}: {}", self.token_file.display(), e);
            ControlError::io(&self.token_file, e)
        })?);

        let token = RedactedToken::new(contents.trim());
        trace!("Loaded control token ({} chars)", token.len());

        Ok(token)
    }
}
