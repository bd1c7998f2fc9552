use crate::de::null_as_empty;

use serde::{Deserialize, Serialize};

/// Most recent service log lines from `GET /logs/tail`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogsResponse {
    #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<String>,
}
