//! Named operations for the presentation layer.
//!
//! Each method is a typed instantiation of the control channel, the link
//! operations or the group store; none adds logic of its own.

use crate::config::ControlConfig;
use crate::control_client::ControlClient;
use crate::error::ControlError;
use crate::groups::GroupStore;
use crate::paths::ControlPaths;
use crate::token::TokenStore;

use models::{
    AdapterGroupMap, LinkStartResponse, LinkStatusResponse, LogsResponse, NetworkResponse,
    StatusSnapshot,
};

use log::debug;
use reqwest::Method;

pub const STATUS_ENDPOINT: &str = "/status";
pub const STOP_ENDPOINT: &str = "/stop";
pub const START_ENDPOINT: &str = "/start";
pub const LOGS_TAIL_ENDPOINT: &str = "/logs/tail";
pub const NETWORK_ENDPOINT: &str = "/network";

#[derive(Debug, Clone)]
pub struct NetworkCloudApi {
    control: ControlClient,
    groups: GroupStore,
}

impl NetworkCloudApi {
    pub fn new(paths: &ControlPaths, config: &ControlConfig) -> Result<Self, ControlError> {
        debug!(
            "NetworkCloud data directory: {} (source: {})",
            paths.app_dir.display(),
            paths.source
        );

        Ok(Self {
            control: ControlClient::new(config, TokenStore::new(paths))?,
            groups: GroupStore::new(paths),
        })
    }

    /// Resolve the data root from the environment and use default connection settings.
    pub fn from_env() -> Result<Self, ControlError> {
        Self::new(&ControlPaths::detect()?, &ControlConfig::default())
    }

    pub fn control(&self) -> &ControlClient {
        &self.control
    }

    pub fn group_store(&self) -> &GroupStore {
        &self.groups
    }

    pub async fn status(&self) -> Result<StatusSnapshot, ControlError> {
        self.control.send(Method::GET, STATUS_ENDPOINT).await
    }

    pub async fn start_link(&self) -> Result<LinkStartResponse, ControlError> {
        self.control.start_link().await
    }

    pub async fn link_status(&self) -> Result<LinkStatusResponse, ControlError> {
        self.control.poll_link_status().await
    }

    pub async fn unlink(&self) -> Result<LinkStatusResponse, ControlError> {
        self.control.unlink().await
    }

    pub async fn stop_service(&self) -> Result<LinkStatusResponse, ControlError> {
        self.control.send(Method::POST, STOP_ENDPOINT).await
    }

    pub async fn start_service(&self) -> Result<LinkStatusResponse, ControlError> {
        self.control.send(Method::POST, START_ENDPOINT).await
    }

    pub async fn tail_logs(&self) -> Result<LogsResponse, ControlError> {
        self.control.send(Method::GET, LOGS_TAIL_ENDPOINT).await
    }

    pub async fn get_network(&self) -> Result<NetworkResponse, ControlError> {
        self.control.send(Method::GET, NETWORK_ENDPOINT).await
    }

    pub fn load_groups(&self) -> Result<AdapterGroupMap, ControlError> {
        self.groups.load()
    }

    pub fn save_groups(&self, groups: &AdapterGroupMap) -> Result<(), ControlError> {
        self.groups.save(groups)
    }

    pub fn assign_group(
        &self,
        adapter_id: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<AdapterGroupMap, ControlError> {
        self.groups.assign(adapter_id, label)
    }

    pub fn unassign_group(&self, adapter_id: &str) -> Result<AdapterGroupMap, ControlError> {
        self.groups.unassign(adapter_id)
    }
}
