//! Errors for the formdrop library
//!
//! Enumeration for all errors that can occur while storing and serving entries
//!

use derive_more::{Display, Error};
use std::io;
use std::path::Path;

pub mod path_buf_error;
pub mod string_error;

pub use crate::error::path_buf_error::PathBufError;
pub use crate::error::string_error::StringError;

pub const FILE_NOT_FOUND: &str = "file not found";

#[derive(Debug, Display, Error)]
pub enum FormdropError {
    // Entries
    EntryNotFound(Box<StringError>),
    #[display("Entry already exists: {_0}")]
    EntryAlreadyExists(Box<PathBufError>),
    InvalidEntry(StringError),

    // Resources (filenames, paths)
    InvalidFilename(StringError),
    #[display("Path is outside of the data directory: {_0}")]
    PathOutsideDataDir(Box<PathBufError>),

    // Config
    InvalidConfig(StringError),

    // External Library Errors
    IO(io::Error),
    JSON(serde_json::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),

    // Fallback
    Basic(StringError),
}

impl FormdropError {
    pub fn basic_str(s: impl AsRef<str>) -> Self {
        FormdropError::Basic(StringError::from(s.as_ref()))
    }

    pub fn entry_not_found(filename: impl AsRef<str>) -> Self {
        let err = format!("{FILE_NOT_FOUND}: {}", filename.as_ref());
        FormdropError::EntryNotFound(Box::new(StringError::from(err)))
    }

    pub fn entry_already_exists(path: impl AsRef<Path>) -> Self {
        FormdropError::EntryAlreadyExists(Box::new(path.as_ref().into()))
    }

    pub fn invalid_entry(s: impl AsRef<str>) -> Self {
        FormdropError::InvalidEntry(StringError::from(s.as_ref()))
    }

    pub fn invalid_filename(filename: impl AsRef<str>) -> Self {
        let err = format!("Invalid filename: {:?}", filename.as_ref());
        FormdropError::InvalidFilename(StringError::from(err))
    }

    pub fn path_outside_data_dir(path: impl AsRef<Path>) -> Self {
        FormdropError::PathOutsideDataDir(Box::new(path.as_ref().into()))
    }

    pub fn invalid_config(s: impl AsRef<str>) -> Self {
        FormdropError::InvalidConfig(StringError::from(s.as_ref()))
    }

    pub fn dir_create_error(path: impl AsRef<Path>, error: io::Error) -> Self {
        let err = format!(
            "Could not create directory {}: {}",
            path.as_ref().display(),
            error
        );
        FormdropError::basic_str(err)
    }

    pub fn dir_read_error(path: impl AsRef<Path>, error: io::Error) -> Self {
        let err = format!(
            "Could not read directory {}: {}",
            path.as_ref().display(),
            error
        );
        FormdropError::basic_str(err)
    }

    pub fn file_read_error(path: impl AsRef<Path>, error: io::Error) -> Self {
        let err = format!("Could not read file {}: {}", path.as_ref().display(), error);
        FormdropError::basic_str(err)
    }

    pub fn file_parse_error(path: impl AsRef<Path>, error: serde_json::Error) -> Self {
        let err = format!(
            "Could not parse file {}: {}",
            path.as_ref().display(),
            error
        );
        FormdropError::basic_str(err)
    }

    pub fn file_metadata_error(path: impl AsRef<Path>, error: io::Error) -> Self {
        let err = format!(
            "Could not get file metadata {}: {}",
            path.as_ref().display(),
            error
        );
        FormdropError::basic_str(err)
    }

    pub fn file_create_error(path: impl AsRef<Path>, error: io::Error) -> Self {
        let err = format!(
            "Could not create file {}: {}",
            path.as_ref().display(),
            error
        );
        FormdropError::basic_str(err)
    }

    pub fn file_write_error(path: impl AsRef<Path>, error: io::Error) -> Self {
        let err = format!(
            "Could not write file {}: {}",
            path.as_ref().display(),
            error
        );
        FormdropError::basic_str(err)
    }

    pub fn file_remove_error(path: impl AsRef<Path>, error: io::Error) -> Self {
        let err = format!(
            "Could not remove file {}: {}",
            path.as_ref().display(),
            error
        );
        FormdropError::basic_str(err)
    }

    /// True for the errors a caller should report as a missing resource
    pub fn is_not_found(&self) -> bool {
        matches!(self, FormdropError::EntryNotFound(_))
    }
}

// if you do not want to call .map_err, implement the std::convert::From trait
impl From<io::Error> for FormdropError {
    fn from(error: io::Error) -> Self {
        FormdropError::IO(error)
    }
}

impl From<serde_json::Error> for FormdropError {
    fn from(error: serde_json::Error) -> Self {
        FormdropError::JSON(error)
    }
}

impl From<toml::ser::Error> for FormdropError {
    fn from(error: toml::ser::Error) -> Self {
        FormdropError::TomlSer(error)
    }
}

impl From<toml::de::Error> for FormdropError {
    fn from(error: toml::de::Error) -> Self {
        FormdropError::TomlDe(error)
    }
}
