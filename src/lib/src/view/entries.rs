use serde::{Deserialize, Serialize};

use crate::model::{EntryFilename, EntryRecord};
use crate::view;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ListEntriesResponse {
    pub success: bool,
    pub data: Vec<EntryRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EntrySavedResponse {
    pub success: bool,
    pub message: String,
    pub filename: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EntriesClearedResponse {
    pub success: bool,
    pub message: String,
    pub removed: usize,
}

impl ListEntriesResponse {
    pub fn new(data: Vec<EntryRecord>) -> ListEntriesResponse {
        ListEntriesResponse {
            success: true,
            data,
        }
    }
}

impl EntrySavedResponse {
    pub fn new(filename: EntryFilename) -> EntrySavedResponse {
        EntrySavedResponse {
            success: true,
            message: String::from(view::http::MSG_ENTRY_SAVED),
            filename: filename.into(),
        }
    }
}

impl EntriesClearedResponse {
    pub fn new(removed: usize) -> EntriesClearedResponse {
        EntriesClearedResponse {
            success: true,
            message: String::from(view::http::MSG_ENTRIES_CLEARED),
            removed,
        }
    }
}
