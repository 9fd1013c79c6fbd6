//! Entries as they are received, named and listed
//!

pub mod entry;
pub mod entry_filename;
pub mod entry_record;

pub use crate::model::entry::Entry;
pub use crate::model::entry_filename::EntryFilename;
pub use crate::model::entry_record::EntryRecord;
