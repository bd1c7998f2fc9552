use crate::commands::render;
use crate::error::CliError;

use control_core::NetworkCloudApi;

use models::{AdapterGroupMap, AdapterInfo};

use serde::Serialize;
use serde_json::Value;

/// An adapter as reported by the service, plus its local group label.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedAdapter<'a> {
    #[serde(flatten)]
    pub adapter: &'a AdapterInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct NetworkView<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<GroupedAdapter<'a>>,
    pub adapters: Vec<GroupedAdapter<'a>>,
}

pub fn group_for<'a>(adapter: &'a AdapterInfo, groups: &'a AdapterGroupMap) -> GroupedAdapter<'a> {
    GroupedAdapter {
        adapter,
        group: groups.get(adapter.group_key()).map(String::as_str),
    }
}

pub async fn execute(api: &NetworkCloudApi) -> Result<Value, CliError> {
    let network = api.get_network().await?;
    let groups = api.load_groups()?;

    let view = NetworkView {
        primary: network.primary.as_ref().map(|a| group_for(a, &groups)),
        adapters: network
            .adapters
            .iter()
            .map(|a| group_for(a, &groups))
            .collect(),
    };

    render(&view)
}
