//! Pairing commands, including the polling loop.
//!
//! The loop lives here rather than in control-core: cadence and give-up
//! policy are presentation decisions. Each iteration is one independent
//! `link status` call; nothing about the pairing is remembered between polls.

use crate::cli::{DEFAULT_LINK_EXPIRY_SECS, DEFAULT_POLL_INTERVAL_SECS, LinkCommand, WaitArgs};
use crate::commands::render;
use crate::error::CliError;

use control_core::NetworkCloudApi;

use models::{LinkStartResponse, LinkStatusResponse};

use std::time::Duration;

use log::{debug, info, warn};
use serde_json::{Value, json};
use tokio::time::{Instant, sleep};

pub async fn execute(api: &NetworkCloudApi, command: &LinkCommand) -> Result<Value, CliError> {
    match command {
        LinkCommand::Start { wait } => {
            let start = api.start_link().await?;
            info!(
                "Pairing started: visit {} and enter {} (expires in {}s)",
                start.verification_uri, start.user_code, start.expires_in
            );

            if !wait {
                return render(&start);
            }

            // Stderr, so the code is visible while stdout waits for the final result.
            eprintln!(
                "Visit {} and enter code {}",
                start.verification_uri, start.user_code
            );

            let outcome = wait_for_link(api, &wait_args_for(&start)).await?;

            Ok(json!({
                "start": render(&start)?,
                "result": render(&outcome)?,
            }))
        }
        LinkCommand::Status => render(&api.link_status().await?),
        LinkCommand::Wait(args) => render(&wait_for_link(api, args).await?),
    }
}

/// Polling settings for a freshly started pairing.
///
/// The service omits `interval` and `expiresIn` when it has no opinion; those
/// decode as 0 and fall back to the CLI defaults.
pub fn wait_args_for(start: &LinkStartResponse) -> WaitArgs {
    let or_default = |value: u64, default: u64| if value == 0 { default } else { value };

    WaitArgs {
        interval: or_default(start.interval, DEFAULT_POLL_INTERVAL_SECS),
        expires_in: or_default(start.expires_in, DEFAULT_LINK_EXPIRY_SECS),
    }
}

/// Poll the link status until the service reports a terminal phase.
///
/// A zero interval falls back to one second. An `expires_in` too large to add
/// to the current instant means no deadline. Errors from any poll end the wait.
///
/// # Errors
/// Returns [`CliError::Cli`] if `expires_in` elapses first.
pub async fn wait_for_link(
    api: &NetworkCloudApi,
    args: &WaitArgs,
) -> Result<LinkStatusResponse, CliError> {
    let interval = Duration::from_secs(args.interval.max(1));
    // None when the expiry lies beyond what Instant can represent: no deadline.
    let deadline = Instant::now().checked_add(Duration::from_secs(args.expires_in));

    loop {
        let status = api.link_status().await?;
        let phase = status.phase();
        debug!("Link phase: {phase}");

        if phase.is_terminal() {
            info!("Pairing finished: {phase}");
            return Ok(status);
        }

        if let Some(deadline) = deadline {
            let next_poll = Instant::now().checked_add(interval);
            if next_poll.is_none_or(|next| next > deadline) {
                warn!("Pairing did not finish within {}s", args.expires_in);
                return Err(CliError::cli(format!(
                    "Pairing did not finish within {}s (last status: {phase})",
                    args.expires_in
                )));
            }
        }

        sleep(interval).await;
    }
}
