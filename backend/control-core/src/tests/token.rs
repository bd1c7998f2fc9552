use crate::error::ControlError;
use crate::paths::ControlPaths;
use crate::token::TokenStore;

use std::fs;

use tempfile::TempDir;

fn store_in(root: &TempDir) -> (ControlPaths, TokenStore) {
    let paths = ControlPaths::from_data_root(root.path());
    let store = TokenStore::new(&paths);
    (paths, store)
}

#[test]
fn given_token_with_surrounding_whitespace_when_loaded_then_trimmed() {
    // GIVEN: A token file with a trailing newline and leading spaces
    let root = TempDir::new().unwrap();
    let (paths, store) = store_in(&root);
    fs::create_dir_all(&paths.app_dir).unwrap();
    fs::write(&paths.token_file, "  tok-123\r\n").unwrap();

    // WHEN: Loading
    let token = store.load().unwrap();

    // THEN: Whitespace is gone
    assert_eq!(token.expose(), "tok-123");
}

#[test]
fn given_token_padded_with_blank_lines_when_loaded_then_only_token_bytes_kept() {
    let root = TempDir::new().unwrap();
    let (paths, store) = store_in(&root);
    fs::create_dir_all(&paths.app_dir).unwrap();
    fs::write(&paths.token_file, "\n\n\ttok-456  \n\n").unwrap();

    let token = store.load().unwrap();

    assert_eq!(token.expose(), "tok-456");
    assert_eq!(token.len(), 7);
}

/// **VALUE**: A missing token is an error, never "no auth".
///
/// **BUG THIS CATCHES**: Treating NotFound as an empty token would send unauthenticated
/// requests and surface as a confusing 401/403 instead of a local storage problem.
#[test]
fn given_missing_token_file_when_loaded_then_returns_io_error() {
    let root = TempDir::new().unwrap();
    let (_, store) = store_in(&root);

    let result = store.load();

    match result {
        Err(ControlError::Io { path, source, .. }) => {
            assert!(path.ends_with(".control_token"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn given_rotated_token_when_loaded_again_then_returns_new_value() {
    let root = TempDir::new().unwrap();
    let (paths, store) = store_in(&root);
    fs::create_dir_all(&paths.app_dir).unwrap();

    fs::write(&paths.token_file, "first").unwrap();
    let first = store.load().unwrap();
    fs::write(&paths.token_file, "second").unwrap();
    let second = store.load().unwrap();

    assert_eq!(first.expose(), "first");
    assert_eq!(second.expose(), "second");
}
