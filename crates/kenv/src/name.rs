// Copyright (c) Contributors to the kenv project.
// SPDX-License-Identifier: Apache-2.0

//! Namespace mapping between environment names and directories.

use std::path::{Component, Path, PathBuf};

use crate::{Error, Result};

#[cfg(test)]
#[path = "./name_test.rs"]
mod name_test;

/// Check that a name is safe to map into the namespace.
///
/// Names are slash-separated relative segments. Absolute names and `.`, `..`
/// or empty segments are rejected; they would escape the environments root or
/// break the name/path correspondence.
pub fn validate(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(invalid(name, "name is empty"));
    }
    if name.starts_with('/') {
        return Err(invalid(name, "name must be relative"));
    }
    for segment in name.split('/') {
        match segment {
            "" => return Err(invalid(name, "empty path segment")),
            "." | ".." => return Err(invalid(name, "'.' and '..' segments are not allowed")),
            _ => {}
        }
    }
    Ok(())
}

fn invalid(name: &str, reason: &'static str) -> Error {
    Error::InvalidName {
        name: name.to_string(),
        reason,
    }
}

/// Map an environment name to its directory under the environments root.
pub fn env_path(root: &Path, name: &str) -> Result<PathBuf> {
    validate(name)?;
    let mut path = root.to_path_buf();
    path.extend(name.split('/'));
    Ok(path)
}

/// Recover an environment name from a directory under the environments root.
///
/// Inverse of [`env_path`] for any path it produced.
pub fn env_name(root: &Path, path: &Path) -> Result<String> {
    let rel = path.strip_prefix(root).map_err(|_| Error::InvalidName {
        name: path.display().to_string(),
        reason: "path is outside the environments root",
    })?;

    let segments: Vec<&str> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect();

    Ok(segments.join("/"))
}
