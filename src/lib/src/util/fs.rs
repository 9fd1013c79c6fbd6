use std::fs::Metadata;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::FormdropError;

/// Create the directory and any missing parents, a directory that already exists is fine
pub async fn create_dir_all(path: impl AsRef<Path>) -> Result<(), FormdropError> {
    let path = path.as_ref();
    fs::create_dir_all(path)
        .await
        .map_err(|err| FormdropError::dir_create_error(path, err))
}

pub fn remove_dir_all(path: impl AsRef<Path>) -> Result<(), FormdropError> {
    let path = path.as_ref();
    log::debug!("Removing dir {:?}", path);
    std::fs::remove_dir_all(path)?;
    Ok(())
}

/// List the direct children of a directory, no recursion
pub async fn read_dir_paths(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, FormdropError> {
    let dir = dir.as_ref();
    let mut read_dir = fs::read_dir(dir)
        .await
        .map_err(|err| FormdropError::dir_read_error(dir, err))?;

    let mut paths: Vec<PathBuf> = vec![];
    while let Some(entry) = read_dir
        .next_entry()
        .await
        .map_err(|err| FormdropError::dir_read_error(dir, err))?
    {
        paths.push(entry.path());
    }
    Ok(paths)
}

/// Write the contents to a file that must not exist yet
pub async fn write_new_file(path: impl AsRef<Path>, contents: &[u8]) -> Result<(), FormdropError> {
    let path = path.as_ref();
    let mut file = match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
    {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            return Err(FormdropError::entry_already_exists(path));
        }
        Err(err) => return Err(FormdropError::file_create_error(path, err)),
    };

    file.write_all(contents)
        .await
        .map_err(|err| FormdropError::file_write_error(path, err))?;
    file.flush()
        .await
        .map_err(|err| FormdropError::file_write_error(path, err))?;
    Ok(())
}

pub fn has_extension(filename: &str, ext: &str) -> bool {
    filename
        .strip_suffix(ext)
        .is_some_and(|stem| stem.ends_with('.'))
}

pub fn filename_str(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}

/// A filename supplied by a client must be a single plain path component
pub fn validate_filename(filename: &str) -> Result<(), FormdropError> {
    let mut components = Path::new(filename).components();
    let is_single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == filename
    );

    if !is_single_normal || !sanitize_filename::is_sanitized(filename) {
        log::debug!("Rejecting filename {:?}", filename);
        return Err(FormdropError::invalid_filename(filename));
    }
    Ok(())
}

/// Canonical form of an existing path without the `\\?\` prefix on windows
pub async fn canonicalize(path: impl AsRef<Path>) -> Result<PathBuf, FormdropError> {
    let canonical = fs::canonicalize(path.as_ref()).await?;
    Ok(dunce::simplified(&canonical).to_path_buf())
}

/// Resolve `path` and make sure it does not leave `dir`, following symlinks
pub async fn resolve_within(
    dir: impl AsRef<Path>,
    path: impl AsRef<Path>,
) -> Result<PathBuf, FormdropError> {
    let canonical_dir = canonicalize(dir).await?;
    let canonical_path = canonicalize(path.as_ref()).await?;
    if canonical_path.starts_with(&canonical_dir) && canonical_path != canonical_dir {
        Ok(canonical_path)
    } else {
        log::warn!(
            "Path {:?} resolves to {:?} outside of {:?}",
            path.as_ref(),
            canonical_path,
            canonical_dir
        );
        Err(FormdropError::path_outside_data_dir(path))
    }
}

/// Birth time where the platform reports it, otherwise the last modification
pub fn created_time(metadata: &Metadata) -> io::Result<SystemTime> {
    metadata.created().or_else(|_| metadata.modified())
}
