//! Client-side control protocol for the NetworkCloud background service.
//!
//! - [`token`]: per-request control token reads
//! - [`groups`]: local adapter group persistence
//! - [`control_client`]: authenticated JSON request/response over loopback HTTP
//! - [`link`]: device-linking operations
//! - [`api`]: the named operations the presentation layer calls

pub mod api;
pub mod config;
pub mod control_client;
pub mod error;
pub mod groups;
pub mod link;
pub mod paths;
pub mod token;

pub use api::NetworkCloudApi;
pub use config::ControlConfig;
pub use control_client::ControlClient;
pub use error::ControlError;
pub use groups::GroupStore;
pub use paths::{ControlPaths, PathSource};
pub use token::TokenStore;

#[cfg(test)]
mod tests;

pub const CONTROL_SERVER_HOSTNAME: &str = "127.0.0.1";
pub const CONTROL_SERVER_PORT: u16 = 17880;
pub const CONTROL_BASE_URL: &str =
    const_format::concatcp!("http://", CONTROL_SERVER_HOSTNAME, ":", CONTROL_SERVER_PORT);
pub const CONTROL_TOKEN_HEADER: &str = "X-Control-Token";
