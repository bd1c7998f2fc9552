// Library exports for testing
// The binary (main.rs) imports these as well

pub mod cli;
pub mod commands;
pub mod dotenv;
pub mod error;
pub mod logger;

use crate::cli::Cli;
use crate::error::CliError;

use control_core::{ControlConfig, ControlPaths, NetworkCloudApi};

/// Build the API client from command-line settings.
pub fn build_api(cli: &Cli) -> Result<NetworkCloudApi, CliError> {
    let paths = match &cli.data_root {
        Some(root) => ControlPaths::from_data_root(root),
        None => ControlPaths::detect()?,
    };

    let mut config = ControlConfig::default().with_base_url(cli.base_url.as_str());
    if let Some(timeout) = cli.timeout {
        config = config.with_request_timeout(timeout);
    }

    Ok(NetworkCloudApi::new(&paths, &config)?)
}

#[cfg(test)]
mod tests;
