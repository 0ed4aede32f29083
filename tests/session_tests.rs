// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Duration, Utc};
use kakebo::session::{Session, debug_session, load_from, save_to};

#[test]
fn session_roundtrips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let session = Session::new("token-abc".into(), Some(Utc::now() + Duration::hours(1)));
    save_to(&path, &session).unwrap();

    let loaded = load_from(&path).unwrap().unwrap();
    assert_eq!(loaded.access_token, "token-abc");
    assert_eq!(loaded.expires_at, session.expires_at);
}

#[test]
fn missing_file_is_no_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    assert!(load_from(&path).unwrap().is_none());
}

#[test]
fn corrupt_file_is_an_error_not_a_panic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "not json").unwrap();
    assert!(load_from(&path).is_err());
}

#[test]
fn expiry_is_fail_closed() {
    let now = Utc::now();
    let expired = Session::new("t".into(), Some(now - Duration::seconds(1)));
    let live = Session::new("t".into(), Some(now + Duration::hours(1)));
    let open_ended = Session::new("t".into(), None);
    assert!(expired.is_expired_at(now));
    assert!(!live.is_expired_at(now));
    assert!(!open_ended.is_expired_at(now));
}

#[test]
fn debug_token_disabled_in_production() {
    assert!(debug_session(Some("production"), Some("tok".into())).is_none());
}

#[test]
fn debug_token_used_outside_production() {
    let s = debug_session(Some("dev"), Some("tok".into())).unwrap();
    assert_eq!(s.access_token, "tok");
    let s = debug_session(None, Some("tok".into())).unwrap();
    assert_eq!(s.access_token, "tok");
}

#[test]
fn empty_or_absent_debug_token_is_no_session() {
    assert!(debug_session(Some("dev"), Some(String::new())).is_none());
    assert!(debug_session(None, None).is_none());
}
