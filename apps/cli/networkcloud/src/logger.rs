//! Logging for the networkcloud command-line client.
//!
//! Dual output: colored stderr (stdout is reserved for command output) and a
//! plain-text log file. Initialization is thread-safe and runs at most once.

use crate::error::CliError;

use std::io::stderr;
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

static INIT_LOGGER_ONCE: Once = Once::new();

static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

const LOG_FILE_NAME: &str = "networkcloud.log";

const LOG_DIR_APP_NAME: &str = "NetworkCloud";

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";

const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

/// File log level for debug builds.
#[cfg(debug_assertions)]
const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

/// File log level for release builds.
#[cfg(not(debug_assertions))]
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// HTTP stack internals are only interesting when tracing.
const TRANSPORT_LOG_TARGETS: [&str; 3] = ["hyper", "hyper_util", "reqwest"];

/// Default log directory: `<local data dir>/NetworkCloud/logs`, or the system
/// temp directory when the platform reports no data directory.
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_DIR_APP_NAME)
        .join("logs")
}

/// Initialize the logger.
///
/// Safe to call multiple times; later calls log a warning and return Ok.
///
/// # Arguments
///
/// * `log_dir` - Directory where the log file will be created (created if missing)
/// * `verbose` - Echo trace-level output to stderr instead of warnings only
///
/// # Errors
///
/// Returns [`CliError::Logger`] if the directory or log file cannot be created,
/// or the global logger cannot be installed.
pub fn initialize(log_dir: &Path, verbose: bool) -> Result<(), CliError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        let level = if verbose { LevelFilter::Trace } else { LOG_LEVEL };
        result = initialize_internal(log_dir, level, verbose);
        if result.is_ok() {
            info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{level:?}");
        }
    });

    result
}

#[track_caller]
pub(crate) fn initialize_internal(log_dir: &Path, level: LevelFilter, verbose: bool) -> Result<(), CliError> {
    std::fs::create_dir_all(log_dir)
        .map_err(|e| CliError::logger(format!("Failed to create log directory: {e}")))?;

    let log_file_path = log_dir.join(LOG_FILE_NAME);

    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let mut base_dispatch = Dispatch::new().level(level);
    if !verbose {
        for target in TRANSPORT_LOG_TARGETS {
            base_dispatch = base_dispatch.level_for(target, LevelFilter::Info);
        }
    }

    let stderr_level = if verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };

    let stderr_dispatch = Dispatch::new()
        .level(stderr_level)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message}",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
            ))
        })
        .chain(stderr());

    let file_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0)
            ))
        })
        .chain(
            fern::log_file(&log_file_path)
                .map_err(|e| CliError::logger(format!("Failed to create log file: {e}")))?,
        );

    base_dispatch
        .chain(stderr_dispatch)
        .chain(file_dispatch)
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    Ok(())
}
