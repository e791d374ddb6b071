// Copyright (c) Contributors to the kenv project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;

#[rstest]
fn test_env_path_joins_segments() {
    let root = Path::new("/app/environments");

    let path = env_path(root, "dev").expect("Should map simple name");
    assert_eq!(path, root.join("dev"));

    let path = env_path(root, "us-west/dev").expect("Should map nested name");
    assert_eq!(path, root.join("us-west").join("dev"));
}

#[rstest]
#[case("")]
#[case("/absolute")]
#[case("a//b")]
#[case("a/")]
#[case("../escape")]
#[case("a/../b")]
#[case("a/./b")]
fn test_unsafe_names_rejected(#[case] name: &str) {
    let root = Path::new("/app/environments");
    match env_path(root, name) {
        Err(crate::Error::InvalidName { .. }) => {}
        other => panic!("Expected InvalidName for {:?}, got: {:?}", name, other),
    }
}

#[rstest]
fn test_env_name_inverts_env_path() {
    let root = Path::new("/app/environments");

    for name in ["dev", "a/b/c", "team/us-west/prod"] {
        let path = env_path(root, name).unwrap();
        assert_eq!(env_name(root, &path).unwrap(), name);
    }
}

#[rstest]
fn test_env_name_rejects_paths_outside_root() {
    let root = Path::new("/app/environments");
    let result = env_name(root, Path::new("/elsewhere/dev"));
    match result {
        Err(crate::Error::InvalidName { .. }) => {}
        other => panic!("Expected InvalidName, got: {:?}", other),
    }
}

#[rstest]
fn test_distinct_names_map_to_distinct_paths() {
    let root = Path::new("/app/environments");
    let a = env_path(root, "a/b").unwrap();
    let b = env_path(root, "a/c").unwrap();
    assert_ne!(a, b);
}
