// Copyright (c) Contributors to the kenv project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use tempfile::TempDir;

use super::*;

#[rstest]
fn test_os_fs_round_trip() {
    let tmp = TempDir::new().unwrap();
    let fs = OsFs;

    let dir = tmp.path().join("a").join("b");
    fs.create_dir_all(&dir).unwrap();
    assert!(fs.is_dir(&dir));

    let file = dir.join("data.json");
    fs.write(&file, b"{}").unwrap();
    assert!(fs.exists(&file));
    assert_eq!(fs.read(&file).unwrap(), b"{}");
}

#[rstest]
fn test_remove_dir_requires_empty() {
    let tmp = TempDir::new().unwrap();
    let fs = OsFs;

    let dir = tmp.path().join("full");
    fs.create_dir_all(&dir).unwrap();
    fs.write(&dir.join("file"), b"x").unwrap();

    assert!(fs.remove_dir(&dir).is_err());

    fs.remove_dir_all(&dir).unwrap();
    assert!(!fs.exists(&dir));
}

#[rstest]
fn test_read_dir_lists_entries() {
    let tmp = TempDir::new().unwrap();
    let fs = OsFs;

    fs.create_dir_all(&tmp.path().join("sub")).unwrap();
    fs.write(&tmp.path().join("file"), b"x").unwrap();

    let mut entries = fs.read_dir(tmp.path()).unwrap();
    entries.sort();
    assert_eq!(entries, vec![tmp.path().join("file"), tmp.path().join("sub")]);
}

#[rstest]
fn test_errors_carry_the_failing_path() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing");

    match OsFs.read(&missing) {
        Err(crate::Error::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("Expected Io error, got: {:?}", other),
    }
}
