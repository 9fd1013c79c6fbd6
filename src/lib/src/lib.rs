//! 📮 libformdrop
//!
//! Persist form submissions as timestamped JSON files in a directory.
//!
//! # Examples
//!
//! Save an entry and list everything in the store:
//!
//! ```
//! use libformdrop::model::Entry;
//! use libformdrop::storage::{EntryStore, LocalEntryStore};
//!
//! let store = LocalEntryStore::new("data");
//! let entry: Entry = serde_json::from_str(r#"{"name": "Ann", "age": 30}"#)?;
//! let filename = store.save(entry).await?;
//! let records = store.list().await?;
//! ```
//!
//! Remove every stored file:
//!
//! ```
//! let removed = store.delete_all().await?;
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod storage;
pub mod test;
pub mod util;
pub mod view;
