// Copyright (c) Contributors to the kenv project.
// SPDX-License-Identifier: Apache-2.0

//! Cluster spec sources consumed by environment creation.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

#[cfg(test)]
#[path = "./cluster_test.rs"]
mod cluster_test;

/// Source of a cluster's API schema bytes.
///
/// Implementations may read a local file or query a live API server; the
/// store only consumes the raw bytes and propagates errors verbatim.
pub trait ClusterSpec {
    /// Raw schema bytes for the target cluster.
    fn data(&self) -> Result<Vec<u8>>;
}

/// Cluster spec read from a local OpenAPI document.
#[derive(Debug, Clone)]
pub struct FileSpec {
    path: PathBuf,
}

impl FileSpec {
    /// Spec source backed by the file at `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The file this spec reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ClusterSpec for FileSpec {
    fn data(&self) -> Result<Vec<u8>> {
        std::fs::read(&self.path).map_err(|e| Error::SpecUnavailable {
            path: self.path.clone(),
            error: e,
        })
    }
}

/// Parse a cluster spec flag into a usable spec source.
///
/// Accepts `file:<path>` or a plain path to a local OpenAPI document. Other
/// acquisition modes (live API servers, pinned upstream releases) are
/// performed by the caller and handed in as their own [`ClusterSpec`]
/// implementations.
pub fn parse_cluster_spec(flag: &str) -> Result<FileSpec> {
    if let Some(path) = flag.strip_prefix("file:") {
        if path.is_empty() {
            return Err(Error::InvalidSpecFlag(flag.to_string()));
        }
        return Ok(FileSpec::new(path));
    }

    if flag.is_empty() || flag.contains(':') {
        return Err(Error::InvalidSpecFlag(flag.to_string()));
    }

    Ok(FileSpec::new(flag))
}
