//! # Storage - where entries live
//!
//! `EntryStore` is the interface the server talks to, `LocalEntryStore`
//! keeps every entry as its own JSON file in a single directory.
//!

pub mod entry_store;
pub mod local;

pub use crate::storage::entry_store::EntryStore;
pub use crate::storage::local::LocalEntryStore;
