// Copyright (c) Contributors to the kenv project.
// SPDX-License-Identifier: Apache-2.0

//! Workspace discovery and initialization.
//!
//! A kenv workspace is any directory containing the `.kenv` marker; all of
//! its environments live under the `environments/` subtree.

use std::path::{Path, PathBuf};

use crate::vfs::Filesystem;
use crate::{Error, Result, ENVIRONMENTS_DIR, WORKSPACE_MARKER};

#[cfg(test)]
#[path = "./workspace_test.rs"]
mod workspace_test;

/// Handle to a discovered or initialized workspace root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Find the workspace containing `start` by walking up parent directories.
    pub fn discover<P: AsRef<Path>>(start: P) -> Result<Self> {
        let start = dunce::canonicalize(start.as_ref()).map_err(|e| Error::Io {
            path: start.as_ref().to_path_buf(),
            error: e,
        })?;

        let mut current = start.clone();
        loop {
            if current.join(WORKSPACE_MARKER).is_dir() {
                return Ok(Self { root: current });
            }
            if !current.pop() {
                return Err(Error::RootNotFound(start));
            }
        }
    }

    /// Initialize a workspace at `root`, creating the marker and the
    /// environments subtree. Succeeds if they already exist.
    pub fn init<F: Filesystem>(fs: &F, root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs.create_dir_all(&root.join(WORKSPACE_MARKER))?;
        fs.create_dir_all(&root.join(ENVIRONMENTS_DIR))?;
        Ok(Self { root })
    }

    /// The workspace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The namespace root all environments live under.
    pub fn environments_root(&self) -> PathBuf {
        self.root.join(ENVIRONMENTS_DIR)
    }
}
