//! Command dispatch: one facade call per subcommand, rendered as JSON.

pub mod groups;
pub mod link;
pub mod network;

use crate::cli::{Command, ServiceCommand};
use crate::error::CliError;

use control_core::NetworkCloudApi;

use log::{debug, info};
use serde::Serialize;
use serde_json::Value;

/// Run `command` against the control service and return its JSON output.
pub async fn execute(api: &NetworkCloudApi, command: &Command) -> Result<Value, CliError> {
    debug!("Executing {command:?}");

    match command {
        Command::Status => render(&api.status().await?),
        Command::Link(action) => link::execute(api, action).await,
        Command::Unlink => {
            let result = api.unlink().await?;
            info!("Unlink requested: {}", result.status);
            render(&result)
        }
        Command::Service(ServiceCommand::Start) => render(&api.start_service().await?),
        Command::Service(ServiceCommand::Stop) => render(&api.stop_service().await?),
        Command::Logs => render(&api.tail_logs().await?),
        Command::Network => network::execute(api).await,
        Command::Groups(action) => groups::execute(api, action),
    }
}

pub(crate) fn render<T: Serialize>(value: &T) -> Result<Value, CliError> {
    Ok(serde_json::to_value(value)?)
}
