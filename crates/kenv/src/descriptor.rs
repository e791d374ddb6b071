// Copyright (c) Contributors to the kenv project.
// SPDX-License-Identifier: Apache-2.0

//! Environment descriptor (de)serialization.
//!
//! The descriptor is the `spec.json` file whose presence marks a directory as
//! an environment. It carries the target cluster endpoint and nothing else.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Error, Result};

#[cfg(test)]
#[path = "./descriptor_test.rs"]
mod descriptor_test;

/// Contents of an environment's `spec.json` file.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct EnvironmentSpec {
    /// Target cluster endpoint.
    pub uri: String,
}

impl EnvironmentSpec {
    /// Build a descriptor for the given endpoint.
    pub fn new<S: Into<String>>(uri: S) -> Self {
        Self { uri: uri.into() }
    }

    /// Encode as the two-space-indented JSON written to `spec.json`.
    pub fn to_bytes(&self) -> Vec<u8> {
        serde_json::to_vec_pretty(self).expect("descriptor serialization is infallible")
    }

    /// Decode a descriptor read from `path`.
    ///
    /// Unknown fields are ignored; only `uri` is recognized.
    pub fn from_bytes(path: &Path, data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data).map_err(|e| Error::Decode {
            path: path.to_path_buf(),
            error: e,
        })
    }
}
