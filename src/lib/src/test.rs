//! Helpers for our unit and integration tests
//!

use std::fs::File;
use std::future::Future;
use std::io::prelude::*;
use std::path::{Path, PathBuf};

use crate::error::FormdropError;
use crate::storage::LocalEntryStore;
use crate::util;

const TEST_RUN_DIR: &str = "data/test/runs";

pub fn init_test_env() {
    util::logging::init_logging();
}

fn create_prefixed_dir(base_dir: &str, prefix: &str) -> Result<PathBuf, FormdropError> {
    let dir_name = format!("{}_{}", prefix, uuid::Uuid::new_v4());
    let full_dir = Path::new(base_dir).join(dir_name);
    std::fs::create_dir_all(&full_dir)?;
    Ok(full_dir)
}

/// A fresh, uniquely named directory under `data/test/runs`
pub fn create_empty_dir() -> Result<PathBuf, FormdropError> {
    create_prefixed_dir(TEST_RUN_DIR, "dir")
}

/// # Run a unit test on an empty directory
///
/// This function will create a directory with a uniq name
/// and take care of cleaning it up afterwards
///
/// ```
/// # use libformdrop::test;
/// test::run_empty_dir_test_async(|dir| async move {
///   // do your fancy testing here
///   assert!(true);
///   Ok(dir)
/// }).await;
/// ```
pub async fn run_empty_dir_test_async<T, Fut>(test: T) -> Result<(), FormdropError>
where
    T: FnOnce(PathBuf) -> Fut,
    Fut: Future<Output = Result<PathBuf, FormdropError>>,
{
    init_test_env();
    let dir = create_empty_dir()?;

    let result = match test(dir).await {
        Ok(dir) => {
            util::fs::remove_dir_all(dir)?;
            true
        }
        Err(err) => {
            eprintln!("Error running test. Err: {err}");
            false
        }
    };

    // Assert everything okay after we cleanup the dir
    assert!(result);

    Ok(())
}

/// # Run a unit test against a store backed by an empty directory
pub async fn run_empty_store_test<T, Fut>(test: T) -> Result<(), FormdropError>
where
    T: FnOnce(LocalEntryStore) -> Fut,
    Fut: Future<Output = Result<LocalEntryStore, FormdropError>>,
{
    init_test_env();
    let dir = create_empty_dir()?;
    let store = LocalEntryStore::new(&dir);

    let result = match test(store).await {
        Ok(store) => {
            util::fs::remove_dir_all(store.data_dir())?;
            true
        }
        Err(err) => {
            eprintln!("Error running test. Err: {err}");
            false
        }
    };

    assert!(result);

    Ok(())
}

pub fn write_txt_file_to_path<P: AsRef<Path>>(
    path: P,
    contents: &str,
) -> Result<PathBuf, FormdropError> {
    let path = path.as_ref();
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path.to_path_buf())
}
