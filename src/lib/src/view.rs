pub mod entries;
pub mod http;
pub mod status_message;

pub use crate::view::status_message::ErrorResponse;

pub use crate::view::entries::{EntriesClearedResponse, EntrySavedResponse, ListEntriesResponse};
