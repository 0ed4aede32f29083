// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use kakebo::commands::categories::ensure_deletable;
use kakebo::models::{AssetCategory, AssetRef};

fn category(name: &str, assets: Vec<AssetRef>) -> AssetCategory {
    AssetCategory {
        id: format!("cat-{name}"),
        name: name.into(),
        assets,
    }
}

#[test]
fn empty_category_is_deletable() {
    assert!(ensure_deletable(&category("savings", vec![])).is_ok());
}

#[test]
fn category_with_assets_is_not_deletable() {
    let cat = category(
        "cash",
        vec![
            AssetRef {
                id: "a1".into(),
                name: "Wallet".into(),
            },
            AssetRef {
                id: "a2".into(),
                name: "Bank".into(),
            },
        ],
    );
    let err = ensure_deletable(&cat).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("2 asset(s)"), "unexpected message: {msg}");
    assert!(msg.contains("Wallet"), "unexpected message: {msg}");
    assert!(msg.contains("Bank"), "unexpected message: {msg}");
}
