//! Optional `.env` loading, so settings like `NETWORKCLOUD_DATA_ROOT` can live
//! next to the binary during development.

use std::path::PathBuf;

/// Result of attempting to load a .env file.
#[derive(Debug)]
pub struct EnvLoadResult {
    pub path: Option<PathBuf>,
    pub loaded: bool,
    /// Parse failure for a .env file that exists, reported once logging is up.
    pub error: Option<String>,
}

/// Load .env from the current directory, then from the executable's directory.
///
/// Runs before the logger exists, so the outcome is returned rather than logged.
pub fn try_load_dotenv() -> EnvLoadResult {
    if let Ok(path) = dotenvy::dotenv() {
        return EnvLoadResult {
            path: Some(path),
            loaded: true,
            error: None,
        };
    }

    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        let env_path = exe_dir.join(".env");
        if env_path.exists() {
            return match dotenvy::from_path(&env_path) {
                Ok(()) => EnvLoadResult {
                    path: Some(env_path),
                    loaded: true,
                    error: None,
                },
                Err(e) => EnvLoadResult {
                    error: Some(format!("Failed to parse .env at {}: {e}", env_path.display())),
                    path: Some(env_path),
                    loaded: false,
                },
            };
        }
    }

    EnvLoadResult {
        path: None,
        loaded: false,
        error: None,
    }
}
