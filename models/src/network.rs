use crate::de::null_as_empty;

use serde::{Deserialize, Serialize};

/// Adapter configuration from `GET /network`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkResponse {
    /// The adapter carrying the default route, if the service could determine one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<AdapterInfo>,
    #[serde(deserialize_with = "null_as_empty")]
    pub adapters: Vec<AdapterInfo>,
}

/// One network adapter's configuration. Supplied entirely by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdapterInfo {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub adapter_type: String,
    pub mac_address: String,
    pub connected: bool,
    pub dhcp_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_mask: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhcp_server: Option<String>,
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub dns_servers: Vec<String>,
}

impl AdapterInfo {
    /// Key used for adapter grouping: the MAC address, or the adapter name when
    /// the service reports no MAC (e.g. some virtual adapters).
    pub fn group_key(&self) -> &str {
        if self.mac_address.trim().is_empty() {
            &self.name
        } else {
            &self.mac_address
        }
    }
}
