// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use kakebo::config::{Config, load_from, save_to};

#[test]
fn config_roundtrips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = Config {
        graphql_url: Some("https://ledger.example/query".into()),
    };
    save_to(&path, &config).unwrap();

    let loaded = load_from(&path).unwrap();
    assert_eq!(
        loaded.graphql_url.as_deref(),
        Some("https://ledger.example/query")
    );
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = load_from(&dir.path().join("absent.json")).unwrap();
    assert!(loaded.graphql_url.is_none());
}
