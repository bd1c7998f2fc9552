use std::collections::BTreeMap;

/// Adapter identifier (MAC address or adapter name) to user-assigned group label.
///
/// Ordered so the persisted JSON is stable across saves.
pub type AdapterGroupMap = BTreeMap<String, String>;
