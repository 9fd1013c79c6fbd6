pub const MSG_ENTRY_SAVED: &str = "Data saved successfully";
pub const MSG_ENTRIES_CLEARED: &str = "All data removed";

pub const MSG_FILE_NOT_FOUND: &str = crate::error::FILE_NOT_FOUND;
pub const MSG_RESOURCE_NOT_FOUND: &str = "not found";
pub const MSG_BAD_REQUEST: &str = "bad request";
pub const MSG_INTERNAL_SERVER_ERROR: &str = "internal server error";
