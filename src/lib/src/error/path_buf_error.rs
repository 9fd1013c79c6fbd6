//! # PathBufError
//!
//! Wraps a path so it can be carried as an error payload.
//!

use std::fmt;
use std::path::{Path, PathBuf};

pub struct PathBufError(PathBuf);

impl From<&Path> for PathBufError {
    fn from(path: &Path) -> Self {
        PathBufError(path.to_path_buf())
    }
}

impl From<PathBuf> for PathBufError {
    fn from(path: PathBuf) -> Self {
        PathBufError(path)
    }
}

impl fmt::Display for PathBufError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl fmt::Debug for PathBufError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl std::error::Error for PathBufError {}
