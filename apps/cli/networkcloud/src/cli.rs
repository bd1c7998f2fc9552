use control_core::CONTROL_BASE_URL;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

/// Default seconds between link status polls when the service gave no hint.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Default seconds to keep polling when the service gave no expiry.
pub const DEFAULT_LINK_EXPIRY_SECS: u64 = 900;

#[derive(Debug, Parser)]
#[command(
    name = "networkcloud",
    version,
    about = "Control the local NetworkCloud background service"
)]
pub struct Cli {
    /// Control API base URL
    #[arg(long, env = "NETWORKCLOUD_CONTROL_URL", default_value = CONTROL_BASE_URL, global = true)]
    pub base_url: String,

    /// Per-user data root holding NetworkCloud/.control_token
    /// [default: $NETWORKCLOUD_DATA_ROOT, then $APPDATA]
    #[arg(long, global = true)]
    pub data_root: Option<PathBuf>,

    /// Give up on a control request after this long (e.g. "10s"); waits forever if unset
    #[arg(long, value_parser = humantime::parse_duration, global = true)]
    pub timeout: Option<Duration>,

    /// Directory for networkcloud.log
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Echo trace logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show service state and link status
    Status,

    /// Link this installation to a NetworkCloud account
    #[command(subcommand)]
    Link(LinkCommand),

    /// Remove the linked identity
    Unlink,

    /// Start or stop the background service
    #[command(subcommand)]
    Service(ServiceCommand),

    /// Show the most recent service log lines
    Logs,

    /// Show network adapters with their group labels
    Network,

    /// Manage local adapter groups
    #[command(subcommand)]
    Groups(GroupsCommand),
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum LinkCommand {
    /// Begin pairing and print the code to enter
    Start {
        /// Keep polling until pairing finishes or the code expires
        #[arg(long)]
        wait: bool,
    },

    /// Show the current pairing status
    Status,

    /// Poll the pairing status until it finishes
    Wait(WaitArgs),
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct WaitArgs {
    /// Seconds between polls
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL_SECS)]
    pub interval: u64,

    /// Seconds before giving up
    #[arg(long, default_value_t = DEFAULT_LINK_EXPIRY_SECS)]
    pub expires_in: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ServiceCommand {
    Start,
    Stop,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum GroupsCommand {
    /// List adapter group assignments
    List,

    /// Assign an adapter (MAC address or name) to a group
    Set { adapter: String, label: String },

    /// Remove an adapter's group assignment
    Remove { adapter: String },
}
