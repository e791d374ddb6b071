// Copyright (c) Contributors to the kenv project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use tempfile::TempDir;

use crate::vfs::OsFs;

use super::*;

#[rstest]
fn test_init_creates_marker_and_environments() {
    let tmp = TempDir::new().unwrap();

    let ws = Workspace::init(&OsFs, tmp.path()).expect("init should succeed");

    assert!(tmp.path().join(WORKSPACE_MARKER).is_dir());
    assert!(ws.environments_root().is_dir());
}

#[rstest]
fn test_init_is_idempotent() {
    let tmp = TempDir::new().unwrap();

    Workspace::init(&OsFs, tmp.path()).unwrap();
    Workspace::init(&OsFs, tmp.path()).expect("re-init should succeed");
}

#[rstest]
fn test_discover_walks_up_to_marker() {
    let tmp = TempDir::new().unwrap();
    Workspace::init(&OsFs, tmp.path()).unwrap();

    let nested = tmp.path().join("components").join("app");
    std::fs::create_dir_all(&nested).unwrap();

    let ws = Workspace::discover(&nested).expect("Should find workspace");
    assert_eq!(ws.root(), dunce::canonicalize(tmp.path()).unwrap());
}

#[rstest]
fn test_discover_without_marker_fails() {
    let tmp = TempDir::new().unwrap();

    match Workspace::discover(tmp.path()) {
        Err(crate::Error::RootNotFound(_)) => {}
        other => panic!("Expected RootNotFound, got: {:?}", other),
    }
}
