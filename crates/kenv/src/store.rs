// Copyright (c) Contributors to the kenv project.
// SPDX-License-Identifier: Apache-2.0

//! The environment namespace store.

use std::path::{Path, PathBuf};

use crate::cluster::ClusterSpec;
use crate::descriptor::EnvironmentSpec;
use crate::name;
use crate::vfs::Filesystem;
use crate::{
    Error, Result, EXTENSIONS_LIB_FILENAME, K8S_LIB_FILENAME, SCHEMA_FILENAME, SPEC_FILENAME,
};

#[cfg(test)]
#[path = "./store_test.rs"]
mod store_test;

/// A named, directory-backed environment record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Slash-separated name, unique within the namespace.
    pub name: String,
    /// Directory holding the environment's artifacts.
    pub path: PathBuf,
    /// Target cluster endpoint.
    pub uri: String,
}

/// Store managing environment subtrees under a fixed namespace root.
///
/// Holds no cache or index; every operation is a blocking sequence of calls
/// through the injected filesystem capability. Callers needing isolation
/// between concurrent operations must serialize access externally.
#[derive(Debug, Clone)]
pub struct EnvironmentStore<F: Filesystem> {
    fs: F,
    root: PathBuf,
}

impl<F: Filesystem> EnvironmentStore<F> {
    /// Create a store over the given environments root.
    pub fn new(fs: F, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
        }
    }

    /// The namespace root all environments live under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create or overwrite the environment `name` targeting `uri`.
    ///
    /// Fetches the schema bytes from `spec`, then writes the schema snapshot,
    /// both generated libraries, and finally the descriptor. Nothing is
    /// rolled back on failure: an interrupted create leaves a directory
    /// without a descriptor, which [`list`](Self::list) does not report until
    /// a retried create completes.
    pub fn create(
        &self,
        name: &str,
        uri: &str,
        spec: &impl ClusterSpec,
        extensions_lib: &[u8],
        k8s_lib: &[u8],
    ) -> Result<()> {
        let env_path = name::env_path(&self.root, name)?;
        self.fs.create_dir_all(&env_path)?;

        // Possibly a network fetch; do it before touching any files.
        let schema = spec.data()?;

        self.fs.write(&env_path.join(SCHEMA_FILENAME), &schema)?;
        self.fs
            .write(&env_path.join(EXTENSIONS_LIB_FILENAME), extensions_lib)?;
        self.fs.write(&env_path.join(K8S_LIB_FILENAME), k8s_lib)?;

        // Descriptor last: its presence marks the environment as complete.
        let descriptor = EnvironmentSpec::new(uri).to_bytes();
        self.fs.write(&env_path.join(SPEC_FILENAME), &descriptor)?;

        tracing::debug!("created environment: {}", name);
        Ok(())
    }

    /// List every environment under the namespace root.
    ///
    /// Rebuilt by a full tree walk on every call; there is no persisted
    /// index. Results are in walk order, not sorted. Any filesystem or
    /// descriptor decode error aborts the whole call.
    pub fn list(&self) -> Result<Vec<Environment>> {
        let mut envs = Vec::new();
        self.walk(&self.root, &mut envs)?;
        Ok(envs)
    }

    fn walk(&self, dir: &Path, envs: &mut Vec<Environment>) -> Result<()> {
        // The root itself is never an environment, descriptor or not.
        if dir != self.root.as_path() {
            let spec_path = dir.join(SPEC_FILENAME);
            if self.fs.exists(&spec_path) {
                let data = self.fs.read(&spec_path)?;
                let spec = EnvironmentSpec::from_bytes(&spec_path, &data)?;
                envs.push(Environment {
                    name: name::env_name(&self.root, dir)?,
                    path: dir.to_path_buf(),
                    uri: spec.uri,
                });
            }
        }

        for entry in self.fs.read_dir(dir)? {
            if self.fs.is_dir(&entry) {
                self.walk(&entry, envs)?;
            }
        }

        Ok(())
    }

    /// Delete the environment `name` and prune newly-empty ancestors.
    ///
    /// The name must resolve to a directory with a descriptor; otherwise
    /// nothing is touched and [`Error::NotFound`] is returned. Pruning walks
    /// upward from the deleted directory's parent and stops at the first
    /// non-empty ancestor; the namespace root is never removed.
    pub fn delete(&self, name: &str) -> Result<()> {
        let env_path = name::env_path(&self.root, name)?;
        if !self.fs.exists(&env_path.join(SPEC_FILENAME)) {
            return Err(Error::NotFound(name.to_string()));
        }

        self.fs.remove_dir_all(&env_path)?;
        tracing::debug!("deleted environment: {}", name);

        let mut current = env_path.parent();
        while let Some(dir) = current {
            if dir == self.root.as_path() {
                break;
            }
            if !self.fs.read_dir(dir)?.is_empty() {
                break;
            }
            self.fs.remove_dir(dir)?;
            current = dir.parent();
        }

        Ok(())
    }
}
