use networkcloud::build_api;
use networkcloud::cli::Cli;
use networkcloud::commands;
use networkcloud::dotenv::try_load_dotenv;
use networkcloud::error::CliError;
use networkcloud::logger::{default_log_dir, initialize as LoggerInitialize};

use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    // Before parsing, so .env values can feed clap's env fallbacks
    let env_result = try_load_dotenv();

    let cli = Cli::parse();

    let log_dir = cli.log_dir.clone().unwrap_or_else(default_log_dir);
    if let Err(e) = LoggerInitialize(&log_dir, cli.verbose) {
        return report(e);
    }

    match (&env_result.path, &env_result.error) {
        (_, Some(message)) => warn!("{message}"),
        (Some(path), None) if env_result.loaded => info!("Loaded .env from: {}", path.display()),
        _ => debug!("No .env file found"),
    }

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            report(e)
        }
    }
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    let api = build_api(cli)?;
    let output = commands::execute(&api, &cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn report(e: CliError) -> ExitCode {
    match serde_json::to_string_pretty(&e) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{e}"),
    }
    ExitCode::from(e.exit_code())
}
