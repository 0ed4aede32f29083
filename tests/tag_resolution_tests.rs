// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use kakebo::models::{Tag, TagResolution, resolve_tag_names, split_tag_input};

fn tag(id: &str, name: &str) -> Tag {
    Tag {
        id: id.into(),
        name: name.into(),
    }
}

#[test]
fn splits_existing_from_new() {
    let existing = vec![tag("t1", "food"), tag("t2", "daily")];
    let names = vec!["food".to_string(), "travel".to_string()];
    let resolved = resolve_tag_names(&names, &existing);
    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved[0], TagResolution::Existing(tag("t1", "food")));
    assert_eq!(resolved[1], TagResolution::New("travel".into()));
}

#[test]
fn matching_is_exact_on_name() {
    let existing = vec![tag("t1", "Food")];
    let resolved = resolve_tag_names(&["food".to_string()], &existing);
    assert_eq!(resolved[0], TagResolution::New("food".into()));
}

#[test]
fn resolution_preserves_input_order() {
    let existing = vec![tag("t1", "a"), tag("t2", "b")];
    let names = vec!["b".to_string(), "x".to_string(), "a".to_string()];
    let resolved = resolve_tag_names(&names, &existing);
    let got: Vec<&str> = resolved.iter().map(|r| r.name()).collect();
    assert_eq!(got, vec!["b", "x", "a"]);
}

#[test]
fn splits_comma_separated_input() {
    assert_eq!(
        split_tag_input(" food , daily ,, travel "),
        vec!["food".to_string(), "daily".to_string(), "travel".to_string()]
    );
    assert!(split_tag_input("  ,  ,").is_empty());
    assert!(split_tag_input("").is_empty());
}
