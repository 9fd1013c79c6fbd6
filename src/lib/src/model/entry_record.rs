use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One stored file as returned by a listing
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EntryRecord {
    pub filename: String,
    pub data: Value,
    pub created: DateTime<Utc>,
}
