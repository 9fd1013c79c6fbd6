use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::FormdropError;
use crate::model::{Entry, EntryFilename, EntryRecord};

/// Persistence for submitted entries.
///
/// Every call is a one-shot operation against the backing store. Nothing
/// coordinates concurrent callers, so a `list` racing a `delete_all` may see
/// a partially cleared store or fail.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// All stored entries ordered by filename. Fails as a whole if any
    /// single entry cannot be read.
    async fn list(&self) -> Result<Vec<EntryRecord>, FormdropError>;

    /// Stamp the entry with the current time and persist it under a name
    /// derived from that same instant.
    async fn save(&self, entry: Entry) -> Result<EntryFilename, FormdropError>;

    /// Resolve a caller supplied filename to the stored file, for streaming
    /// it back. Returns `EntryNotFound` if there is no such file.
    async fn get(&self, filename: &str) -> Result<PathBuf, FormdropError>;

    /// Remove every stored file, returning how many were removed. The first
    /// failure aborts and may leave the store partially cleared.
    async fn delete_all(&self) -> Result<usize, FormdropError>;
}
