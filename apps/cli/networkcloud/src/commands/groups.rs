use crate::cli::GroupsCommand;
use crate::commands::render;
use crate::error::CliError;

use control_core::NetworkCloudApi;

use log::info;
use serde_json::Value;

pub fn execute(api: &NetworkCloudApi, command: &GroupsCommand) -> Result<Value, CliError> {
    let groups = match command {
        GroupsCommand::List => api.load_groups()?,
        GroupsCommand::Set { adapter, label } => {
            if label.trim().is_empty() {
                return Err(CliError::cli("Group label cannot be empty"));
            }
            let groups = api.assign_group(adapter.as_str(), label.as_str())?;
            info!("Assigned adapter {adapter} to group {label}");
            groups
        }
        GroupsCommand::Remove { adapter } => {
            let groups = api.unassign_group(adapter)?;
            info!("Removed group assignment for adapter {adapter}");
            groups
        }
    };

    render(&groups)
}
