// Copyright (c) Contributors to the kenv project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use std::path::Path;

use super::*;

#[rstest]
fn test_encode_uses_two_space_indentation() {
    let spec = EnvironmentSpec::new("https://10.0.0.1:6443");
    let encoded = String::from_utf8(spec.to_bytes()).unwrap();
    assert_eq!(encoded, "{\n  \"uri\": \"https://10.0.0.1:6443\"\n}");
}

#[rstest]
fn test_decode_ignores_unknown_fields() {
    let data = br#"{"uri": "https://example:6443", "server": "ignored"}"#;
    let spec =
        EnvironmentSpec::from_bytes(Path::new("spec.json"), data).expect("Should decode");
    assert_eq!(spec.uri, "https://example:6443");
}

#[rstest]
#[case("https://10.0.0.1:6443")]
#[case("https://klüster.example:6443/path?q=a&b=%20")]
#[case("unix:///var/run/cluster.sock")]
fn test_round_trip_preserves_uri(#[case] uri: &str) {
    let spec = EnvironmentSpec::new(uri);
    let decoded =
        EnvironmentSpec::from_bytes(Path::new("spec.json"), &spec.to_bytes()).unwrap();
    assert_eq!(decoded.uri, uri);
}

#[rstest]
fn test_malformed_descriptor_is_decode_error() {
    let result = EnvironmentSpec::from_bytes(Path::new("spec.json"), b"{not json");
    match result {
        Err(crate::Error::Decode { path, .. }) => {
            assert_eq!(path, Path::new("spec.json"));
        }
        other => panic!("Expected Decode error, got: {:?}", other),
    }
}
