// Unit tests for data root resolution.
// These mutate process environment variables, so they run serially.

use crate::error::ControlError;
use crate::paths::{ControlPaths, DATA_ROOT_ENV, DATA_ROOT_OVERRIDE_ENV, PathSource};

use std::env;
use std::path::PathBuf;

use serial_test::serial;

fn set_var(name: &str, value: &str) {
    // SAFETY: every test touching these variables is #[serial].
    unsafe { env::set_var(name, value) };
}

fn remove_var(name: &str) {
    // SAFETY: every test touching these variables is #[serial].
    unsafe { env::remove_var(name) };
}

#[test]
fn given_explicit_root_when_building_paths_then_files_live_under_networkcloud() {
    let paths = ControlPaths::from_data_root("/data/user");

    assert_eq!(paths.app_dir, PathBuf::from("/data/user/NetworkCloud"));
    assert_eq!(
        paths.token_file,
        PathBuf::from("/data/user/NetworkCloud/.control_token")
    );
    assert_eq!(
        paths.groups_file,
        PathBuf::from("/data/user/NetworkCloud/adapter_groups.json")
    );
    assert_eq!(paths.source, PathSource::Explicit);
}

/// **VALUE**: A missing data root is a hard configuration error.
///
/// **WHY THIS MATTERS**: Guessing a directory would send the client looking for a token
/// the service never wrote, and the resulting IO error would hide the real cause.
#[test]
#[serial]
fn given_no_data_root_env_when_detecting_then_returns_configuration_error() {
    // GIVEN: Neither variable set
    remove_var(DATA_ROOT_OVERRIDE_ENV);
    remove_var(DATA_ROOT_ENV);

    // WHEN: Detecting
    let result = ControlPaths::detect();

    // THEN: Configuration error naming the variable
    match result {
        Err(ControlError::Configuration { message, .. }) => {
            assert!(message.contains(DATA_ROOT_ENV), "got: {message}");
        }
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
#[serial]
fn given_empty_data_root_env_when_detecting_then_treated_as_unset() {
    remove_var(DATA_ROOT_OVERRIDE_ENV);
    set_var(DATA_ROOT_ENV, "");

    let result = ControlPaths::detect();

    remove_var(DATA_ROOT_ENV);
    assert!(matches!(result, Err(ControlError::Configuration { .. })));
}

#[test]
#[serial]
fn given_appdata_when_detecting_then_uses_appdata_root() {
    remove_var(DATA_ROOT_OVERRIDE_ENV);
    set_var(DATA_ROOT_ENV, "/tmp/appdata-root");

    let paths = ControlPaths::detect().unwrap();

    remove_var(DATA_ROOT_ENV);
    assert_eq!(paths.app_dir, PathBuf::from("/tmp/appdata-root/NetworkCloud"));
    assert_eq!(paths.source, PathSource::AppData);
}

#[test]
#[serial]
fn given_override_and_appdata_when_detecting_then_override_wins() {
    set_var(DATA_ROOT_OVERRIDE_ENV, "/tmp/override-root");
    set_var(DATA_ROOT_ENV, "/tmp/appdata-root");

    let paths = ControlPaths::detect().unwrap();

    remove_var(DATA_ROOT_OVERRIDE_ENV);
    remove_var(DATA_ROOT_ENV);
    assert_eq!(paths.app_dir, PathBuf::from("/tmp/override-root/NetworkCloud"));
    assert_eq!(paths.source, PathSource::EnvOverride);
    assert_eq!(paths.source.to_string(), DATA_ROOT_OVERRIDE_ENV);
}
