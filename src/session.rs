// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A bearer credential obtained out-of-band from the identity provider.
/// There is no ambient auth state: the session is loaded explicitly and
/// handed to the client. An expired session counts as no session at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub obtained_at: DateTime<Utc>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(access_token: String, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            access_token,
            obtained_at: Utc::now(),
            expires_at,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|t| t <= now)
    }
}

pub fn session_path() -> Result<PathBuf> {
    Ok(crate::config::config_dir()?.join("session.json"))
}

pub fn load_from(path: &Path) -> Result<Option<Session>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read session file {}", path.display()))?;
    let session: Session = serde_json::from_str(&raw)
        .with_context(|| format!("Parse session file {}", path.display()))?;
    Ok(Some(session))
}

pub fn save_to(path: &Path, session: &Session) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(session)?)
        .with_context(|| format!("Write session file {}", path.display()))?;
    Ok(())
}

pub fn load() -> Result<Option<Session>> {
    load_from(&session_path()?)
}

pub fn save(session: &Session) -> Result<()> {
    save_to(&session_path()?, session)
}

/// Remove the stored session. Returns whether one existed.
pub fn clear() -> Result<bool> {
    let path = session_path()?;
    if path.exists() {
        fs::remove_file(&path)
            .with_context(|| format!("Remove session file {}", path.display()))?;
        return Ok(true);
    }
    Ok(false)
}

/// Static debug credential, honored only outside the production profile.
pub fn debug_session(profile: Option<&str>, token: Option<String>) -> Option<Session> {
    if profile == Some("production") {
        return None;
    }
    token
        .filter(|t| !t.is_empty())
        .map(|t| Session::new(t, None))
}

/// Resolve the credential for an outbound request: stored session first,
/// debug token from the environment as a non-production fallback.
pub fn resolve() -> Result<Option<Session>> {
    let now = Utc::now();
    if let Some(session) = load()? {
        if !session.is_expired_at(now) {
            return Ok(Some(session));
        }
    }
    Ok(debug_session(
        std::env::var("KAKEBO_PROFILE").ok().as_deref(),
        std::env::var("KAKEBO_DEBUG_TOKEN").ok(),
    ))
}
