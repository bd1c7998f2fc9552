//! Local persistence of user-assigned adapter groups.
//!
//! The groups file lives beside the control token but belongs to this client
//! alone; the background service never reads it. Writes replace the whole file
//! (temp file + rename), so a failed save leaves the previous contents intact.
//! There is no locking: concurrent writers race and the last rename wins.

use crate::error::ControlError;
use crate::paths::ControlPaths;

use models::AdapterGroupMap;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

const TEMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone)]
pub struct GroupStore {
    config_dir: PathBuf,
    groups_file: PathBuf,
}

impl GroupStore {
    pub fn new(paths: &ControlPaths) -> Self {
        Self {
            config_dir: paths.app_dir.clone(),
            groups_file: paths.groups_file.clone(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.groups_file
    }

    /// Load the adapter group map.
    ///
    /// A missing file, a whitespace-only file and a JSON `null` all load as an
    /// empty map.
    ///
    /// # Errors
    /// - [`ControlError::Io`] if the config directory cannot be created or the
    ///   file exists but cannot be read
    /// - [`ControlError::Serialization`] if the file is not a JSON object of strings
    pub fn load(&self) -> Result<AdapterGroupMap, ControlError> {
        self.ensure_config_dir()?;

        let contents = match fs::read_to_string(&self.groups_file) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(
                    "Groups file not found at {}, using empty map",
                    self.groups_file.display()
                );
                return Ok(AdapterGroupMap::new());
            }
            Err(e) => {
                warn!("Failed to read groups file: {}", e);
                return Err(ControlError::io(&self.groups_file, e));
            }
        };

        if contents.trim().is_empty() {
            return Ok(AdapterGroupMap::new());
        }

        let groups: Option<AdapterGroupMap> = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse groups file {}: {}", self.groups_file.display(), e);
            ControlError::serialization(format!("{}: {e}", self.groups_file.display()))
        })?;

        let groups = groups.unwrap_or_default();
        debug!("Loaded {} adapter group(s)", groups.len());
        Ok(groups)
    }

    /// Replace the persisted map with `groups`.
    ///
    /// Writes 2-space indented JSON to a sibling temp file, then renames it over
    /// the groups file. This is not a merge: callers load, modify, then save.
    ///
    /// # Errors
    /// Returns [`ControlError::Io`] if the directory cannot be created or the
    /// write or rename fails, [`ControlError::Serialization`] if encoding fails.
    pub fn save(&self, groups: &AdapterGroupMap) -> Result<(), ControlError> {
        self.ensure_config_dir()?;

        let json = serde_json::to_string_pretty(groups)?;
        let temp_path = self.groups_file.with_extension(format!("json.{TEMP_SUFFIX}"));

        fs::write(&temp_path, json).map_err(|e| {
            warn!("Failed to write groups temp file: {}", e);
            ControlError::io(&temp_path, e)
        })?;

        if let Err(e) = fs::rename(&temp_path, &self.groups_file) {
            warn!("Failed to replace groups file: {}", e);
            let _ = fs::remove_file(&temp_path);
            return Err(ControlError::io(&self.groups_file, e));
        }

        info!(
            "Saved {} adapter group(s) to {}",
            groups.len(),
            self.groups_file.display()
        );
        Ok(())
    }

    /// Assign `adapter_id` to `label`, persisting the result.
    pub fn assign(
        &self,
        adapter_id: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<AdapterGroupMap, ControlError> {
        let mut groups = self.load()?;
        groups.insert(adapter_id.into(), label.into());
        self.save(&groups)?;
        Ok(groups)
    }

    /// Remove any group assignment for `adapter_id`, persisting the result.
    ///
    /// Removing an unassigned adapter still rewrites the file.
    pub fn unassign(&self, adapter_id: &str) -> Result<AdapterGroupMap, ControlError> {
        let mut groups = self.load()?;
        if groups.remove(adapter_id).is_none() {
            debug!("Adapter {adapter_id} had no group assignment");
        }
        self.save(&groups)?;
        Ok(groups)
    }

    fn ensure_config_dir(&self) -> Result<(), ControlError> {
        fs::create_dir_all(&self.config_dir).map_err(|e| {
            warn!(
                "Failed to create config directory {}: {}",
                self.config_dir.display(),
                e
            );
            ControlError::io(&self.config_dir, e)
        })
    }
}
