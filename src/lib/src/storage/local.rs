use async_trait::async_trait;
use chrono::Utc;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::constants::ENTRY_FILE_EXTENSION;
use crate::error::FormdropError;
use crate::model::{Entry, EntryFilename, EntryRecord};
use crate::storage::EntryStore;
use crate::util;

/// Entries stored as `entry_<timestamp>.json` files in one flat directory.
/// The directory listing is the catalog, there is no index file.
#[derive(Debug, Clone)]
pub struct LocalEntryStore {
    data_dir: PathBuf,
}

impl LocalEntryStore {
    pub fn new(data_dir: impl AsRef<Path>) -> LocalEntryStore {
        LocalEntryStore {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Create the data directory if it is missing
    pub async fn ensure_dir(&self) -> Result<(), FormdropError> {
        util::fs::create_dir_all(&self.data_dir)
            .await
            .inspect_err(|err| log::error!("Error creating data directory: {}", err))
    }

    async fn read_record(&self, filename: String) -> Result<EntryRecord, FormdropError> {
        let path = self.data_dir.join(&filename);
        let contents = fs::read_to_string(&path)
            .await
            .map_err(|err| FormdropError::file_read_error(&path, err))?;
        let data = serde_json::from_str(&contents)
            .map_err(|err| FormdropError::file_parse_error(&path, err))?;
        let metadata = fs::metadata(&path)
            .await
            .map_err(|err| FormdropError::file_metadata_error(&path, err))?;
        let created = util::fs::created_time(&metadata)
            .map_err(|err| FormdropError::file_metadata_error(&path, err))?;

        Ok(EntryRecord {
            filename,
            data,
            created: util::time::to_utc(created),
        })
    }

    /// Names of the regular `.json` files, symlinks and directories are left out
    async fn list_entry_filenames(&self) -> Result<Vec<String>, FormdropError> {
        let mut filenames: Vec<String> = vec![];
        for path in util::fs::read_dir_paths(&self.data_dir).await? {
            let Some(filename) = util::fs::filename_str(&path) else {
                log::warn!("Skipping non utf-8 filename {:?}", path);
                continue;
            };
            if !util::fs::has_extension(filename, ENTRY_FILE_EXTENSION) {
                continue;
            }

            let metadata = fs::symlink_metadata(&path)
                .await
                .map_err(|err| FormdropError::file_metadata_error(&path, err))?;
            if metadata.is_file() {
                filenames.push(filename.to_string());
            } else {
                log::debug!("Skipping {:?}, not a regular file", path);
            }
        }
        filenames.sort();
        Ok(filenames)
    }
}

#[async_trait]
impl EntryStore for LocalEntryStore {
    async fn list(&self) -> Result<Vec<EntryRecord>, FormdropError> {
        self.ensure_dir().await?;

        let filenames = self.list_entry_filenames().await?;
        log::debug!("Listing {} entries in {:?}", filenames.len(), self.data_dir);

        let mut records = Vec::with_capacity(filenames.len());
        for filename in filenames {
            records.push(self.read_record(filename).await?);
        }
        Ok(records)
    }

    async fn save(&self, mut entry: Entry) -> Result<EntryFilename, FormdropError> {
        self.ensure_dir().await?;

        let now = Utc::now();
        entry.stamp(&now);
        let filename = EntryFilename::from_timestamp(&now);
        let path = self.data_dir.join(filename.as_str());

        let contents = entry.to_pretty_json()?;
        util::fs::write_new_file(&path, contents.as_bytes()).await?;

        log::info!("New entry saved: {}", filename);
        Ok(filename)
    }

    async fn get(&self, filename: &str) -> Result<PathBuf, FormdropError> {
        util::fs::validate_filename(filename)?;

        let path = self.data_dir.join(filename);
        let metadata = match fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(FormdropError::entry_not_found(filename));
            }
            Err(err) => return Err(FormdropError::file_metadata_error(&path, err)),
        };
        if !metadata.is_file() {
            return Err(FormdropError::entry_not_found(filename));
        }

        util::fs::resolve_within(&self.data_dir, &path).await
    }

    async fn delete_all(&self) -> Result<usize, FormdropError> {
        self.ensure_dir().await?;

        let mut removed = 0;
        for path in util::fs::read_dir_paths(&self.data_dir).await? {
            let metadata = fs::symlink_metadata(&path)
                .await
                .map_err(|err| FormdropError::file_metadata_error(&path, err))?;
            if metadata.is_dir() {
                log::warn!("Skipping directory {:?} while clearing entries", path);
                continue;
            }

            fs::remove_file(&path)
                .await
                .map_err(|err| FormdropError::file_remove_error(&path, err))?;
            removed += 1;
        }

        log::info!("Removed {} files from {:?}", removed, self.data_dir);
        Ok(removed)
    }
}
