// Unit tests for the adapter group store.
// Every test runs against its own temporary data root.

use crate::error::ControlError;
use crate::groups::GroupStore;
use crate::paths::ControlPaths;

use models::AdapterGroupMap;

use std::fs;

use tempfile::TempDir;

fn store_in(root: &TempDir) -> (ControlPaths, GroupStore) {
    let paths = ControlPaths::from_data_root(root.path());
    let store = GroupStore::new(&paths);
    (paths, store)
}

fn map(entries: &[(&str, &str)]) -> AdapterGroupMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// **VALUE**: First run (no file yet) yields an empty map and creates the directory.
///
/// **WHY THIS MATTERS**: A fresh install has no groups file. Erroring here would make
/// the network view unusable until the user saved something.
#[test]
fn given_no_groups_file_when_loaded_then_returns_empty_map() {
    // GIVEN: An empty data root
    let root = TempDir::new().unwrap();
    let (paths, store) = store_in(&root);

    // WHEN: Loading
    let groups = store.load().unwrap();

    // THEN: Empty map, and the config directory now exists
    assert!(groups.is_empty());
    assert!(paths.app_dir.is_dir());
    assert!(!paths.groups_file.exists(), "Load must not create the file");
}

#[test]
fn given_whitespace_only_file_when_loaded_then_returns_empty_map() {
    let root = TempDir::new().unwrap();
    let (paths, store) = store_in(&root);
    fs::create_dir_all(&paths.app_dir).unwrap();
    fs::write(&paths.groups_file, "  \n\t \n").unwrap();

    let groups = store.load().unwrap();

    assert!(groups.is_empty());
}

#[test]
fn given_json_null_file_when_loaded_then_returns_empty_map() {
    let root = TempDir::new().unwrap();
    let (paths, store) = store_in(&root);
    fs::create_dir_all(&paths.app_dir).unwrap();
    fs::write(&paths.groups_file, "null").unwrap();

    let groups = store.load().unwrap();

    assert!(groups.is_empty());
}

#[test]
fn given_malformed_json_when_loaded_then_returns_serialization_error() {
    let root = TempDir::new().unwrap();
    let (paths, store) = store_in(&root);
    fs::create_dir_all(&paths.app_dir).unwrap();
    fs::write(&paths.groups_file, "{\"AA:BB\": ").unwrap();

    let result = store.load();

    assert!(
        matches!(result, Err(ControlError::Serialization { .. })),
        "got {result:?}"
    );
}

#[test]
fn given_non_string_values_when_loaded_then_returns_serialization_error() {
    let root = TempDir::new().unwrap();
    let (paths, store) = store_in(&root);
    fs::create_dir_all(&paths.app_dir).unwrap();
    fs::write(&paths.groups_file, r#"{"AA:BB": 3}"#).unwrap();

    assert!(matches!(
        store.load(),
        Err(ControlError::Serialization { .. })
    ));
}

#[test]
fn given_saved_map_when_loaded_then_round_trips() {
    let root = TempDir::new().unwrap();
    let (_, store) = store_in(&root);
    let groups = map(&[("AA:BB:CC:DD:EE:FF", "Office")]);

    store.save(&groups).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.get("AA:BB:CC:DD:EE:FF").map(String::as_str), Some("Office"));
}

#[test]
fn given_empty_map_when_saved_and_loaded_then_round_trips() {
    let root = TempDir::new().unwrap();
    let (paths, store) = store_in(&root);

    store.save(&AdapterGroupMap::new()).unwrap();

    assert_eq!(fs::read_to_string(&paths.groups_file).unwrap(), "{}");
    assert!(store.load().unwrap().is_empty());
}

/// **VALUE**: The file is 2-space indented with sorted keys.
///
/// **WHY THIS MATTERS**: Users diff and hand-edit this file. Reordered keys on every
/// save would make those diffs noisy.
#[test]
fn given_map_when_saved_then_file_is_indented_and_sorted() {
    let root = TempDir::new().unwrap();
    let (paths, store) = store_in(&root);
    let groups = map(&[("Wi-Fi", "Home"), ("Ethernet", "Office")]);

    store.save(&groups).unwrap();

    let contents = fs::read_to_string(&paths.groups_file).unwrap();
    assert_eq!(
        contents,
        "{\n  \"Ethernet\": \"Office\",\n  \"Wi-Fi\": \"Home\"\n}"
    );
}

/// **VALUE**: Saving replaces the whole map rather than merging into it.
#[test]
fn given_existing_groups_when_saving_smaller_map_then_old_entries_removed() {
    let root = TempDir::new().unwrap();
    let (_, store) = store_in(&root);
    store
        .save(&map(&[("A", "One"), ("B", "Two")]))
        .unwrap();

    store.save(&map(&[("B", "Three")])).unwrap();

    assert_eq!(store.load().unwrap(), map(&[("B", "Three")]));
}

#[test]
fn given_successful_save_when_done_then_no_temp_file_left_behind() {
    let root = TempDir::new().unwrap();
    let (paths, store) = store_in(&root);

    store.save(&map(&[("A", "One")])).unwrap();

    let leftovers: Vec<_> = fs::read_dir(&paths.app_dir)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "Temp file should be renamed away");
}

/// **VALUE**: A failed write leaves the previous file untouched.
///
/// **BUG THIS CATCHES**: Writing the target file in place would truncate it before a
/// failure. Here the rename target is a directory, so the rename fails after the
/// temp write succeeds; the temp file must be cleaned up and the error must be Io.
#[test]
fn given_rename_failure_when_saving_then_returns_io_error_and_cleans_temp() {
    let root = TempDir::new().unwrap();
    let (paths, store) = store_in(&root);
    fs::create_dir_all(&paths.groups_file).unwrap();
    fs::write(paths.groups_file.join("keep"), "x").unwrap();

    let result = store.save(&map(&[("A", "One")]));

    assert!(matches!(result, Err(ControlError::Io { .. })), "got {result:?}");
    assert!(paths.groups_file.join("keep").exists());
    assert!(!paths.app_dir.join("adapter_groups.json.tmp").exists());
}

#[test]
fn given_data_root_is_a_file_when_loading_then_returns_io_error() {
    let root = TempDir::new().unwrap();
    let blocker = root.path().join("not-a-dir");
    fs::write(&blocker, "x").unwrap();
    let store = GroupStore::new(&ControlPaths::from_data_root(&blocker));

    let result = store.load();

    assert!(matches!(result, Err(ControlError::Io { .. })), "got {result:?}");
}

#[test]
fn given_assign_and_unassign_when_applied_then_persisted() {
    let root = TempDir::new().unwrap();
    let (_, store) = store_in(&root);

    store.assign("AA:BB:CC:DD:EE:FF", "Office").unwrap();
    store.assign("11:22:33:44:55:66", "Lab").unwrap();
    let after_unassign = store.unassign("AA:BB:CC:DD:EE:FF").unwrap();

    assert_eq!(after_unassign, map(&[("11:22:33:44:55:66", "Lab")]));
    assert_eq!(store.load().unwrap(), after_unassign);
}
