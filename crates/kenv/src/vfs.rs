// Copyright (c) Contributors to the kenv project.
// SPDX-License-Identifier: Apache-2.0

//! Injected filesystem capability used by the environment store.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

#[cfg(test)]
#[path = "./vfs_test.rs"]
mod vfs_test;

/// Filesystem operations the environment store depends on.
///
/// The store never touches `std::fs` directly; production code injects
/// [`OsFs`] and tests run against temporary directories.
pub trait Filesystem {
    /// Read the full contents of a file.
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Write `data` to a file, replacing any existing contents.
    fn write(&self, path: &Path, data: &[u8]) -> Result<()>;

    /// Create a directory and all missing parents. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Remove a directory and everything beneath it.
    fn remove_dir_all(&self, path: &Path) -> Result<()>;

    /// Remove a single directory; fails if it is not empty.
    fn remove_dir(&self, path: &Path) -> Result<()>;

    /// Entries of a directory, in no guaranteed order.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Whether anything exists at the path.
    fn exists(&self, path: &Path) -> bool;

    /// Whether the path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Production filesystem backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

fn io_err(path: &Path, error: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        error,
    }
}

impl Filesystem for OsFs {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        std::fs::read(path).map_err(|e| io_err(path, e))
    }

    fn write(&self, path: &Path, data: &[u8]) -> Result<()> {
        std::fs::write(path, data).map_err(|e| io_err(path, e))
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| io_err(path, e))
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::remove_dir_all(path).map_err(|e| io_err(path, e))
    }

    fn remove_dir(&self, path: &Path) -> Result<()> {
        std::fs::remove_dir(path).map_err(|e| io_err(path, e))
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path).map_err(|e| io_err(path, e))? {
            let entry = entry.map_err(|e| io_err(path, e))?;
            entries.push(entry.path());
        }
        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
