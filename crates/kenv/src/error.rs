// Copyright (c) Contributors to the kenv project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for kenv operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience Result type with kenv Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during kenv operations.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Environment name is malformed or traversal-unsafe
    #[error("Invalid environment name {name:?}: {reason}")]
    #[diagnostic(
        code(kenv::invalid_name),
        help("Environment names are relative slash-separated segments, e.g. 'us-west/dev'")
    )]
    InvalidName { name: String, reason: &'static str },

    /// No environment with this name exists
    #[error("Environment {0:?} does not exist")]
    #[diagnostic(
        code(kenv::not_found),
        help("Run 'kenv list' to see the environments in this workspace")
    )]
    NotFound(String),

    /// Cluster spec bytes could not be fetched
    #[error("Cluster spec unavailable: {path:?}")]
    #[diagnostic(code(kenv::spec_unavailable))]
    SpecUnavailable {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Filesystem operation failed
    #[error("Filesystem error at {path:?}")]
    #[diagnostic(code(kenv::io_error))]
    Io {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Environment descriptor is not valid JSON
    #[error("Invalid descriptor file: {path:?}")]
    #[diagnostic(
        code(kenv::invalid_descriptor),
        help("The descriptor must be a JSON object with a string 'uri' field")
    )]
    Decode {
        path: PathBuf,
        #[source]
        error: serde_json::Error,
    },

    /// Unparseable cluster spec flag
    #[error("Unable to parse cluster spec {0:?}")]
    #[diagnostic(
        code(kenv::invalid_spec_flag),
        help("Supported forms: 'file:<path>' or a plain path to a local OpenAPI document")
    )]
    InvalidSpecFlag(String),

    /// No workspace marker found in directory tree
    #[error("No kenv workspace found in {0:?} or any parent directory")]
    #[diagnostic(
        code(kenv::root_not_found),
        help("Create a workspace with 'kenv init' or pass a starting directory with --dir")
    )]
    RootNotFound(PathBuf),
}
