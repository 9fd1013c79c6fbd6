use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{ENTRY_FILE_EXTENSION, ENTRY_FILE_PREFIX};
use crate::util;

/// Name of a stored file, `entry_<timestamp>.json`. Doubles as the entry id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct EntryFilename(String);

impl EntryFilename {
    pub fn from_timestamp(timestamp: &DateTime<Utc>) -> EntryFilename {
        let sanitized = util::time::sanitize_for_filename(&util::time::iso_timestamp(timestamp));
        EntryFilename(format!(
            "{ENTRY_FILE_PREFIX}{sanitized}.{ENTRY_FILE_EXTENSION}"
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryFilename {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EntryFilename {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<EntryFilename> for String {
    fn from(filename: EntryFilename) -> Self {
        filename.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::model::EntryFilename;

    #[test]
    fn test_entry_filename_from_timestamp() {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let filename = EntryFilename::from_timestamp(&timestamp);
        assert_eq!(filename.as_str(), "entry_2024-01-01T12-00-00-000Z.json");
    }

    #[test]
    fn test_entry_filenames_sort_chronologically() {
        let earlier = Utc.with_ymd_and_hms(2024, 1, 1, 9, 59, 59).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        assert!(EntryFilename::from_timestamp(&earlier) < EntryFilename::from_timestamp(&later));
    }
}
