// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Kakebo", "kakebo"));

pub fn config_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    let dir = proj.config_dir().to_path_buf();
    fs::create_dir_all(&dir).context("Failed to create config dir")?;
    Ok(dir)
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub graphql_url: Option<String>,
}

impl Config {
    /// The endpoint every request goes to. `KAKEBO_GRAPHQL_URL` wins over the
    /// config file; a missing endpoint is a setup error, not an auth error.
    pub fn endpoint(&self) -> Result<String> {
        if let Ok(url) = std::env::var("KAKEBO_GRAPHQL_URL") {
            if !url.is_empty() {
                return Ok(url);
            }
        }
        self.graphql_url
            .clone()
            .context("No GraphQL endpoint configured; run 'kakebo config set-url <URL>'")
    }
}

pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw =
        fs::read_to_string(path).with_context(|| format!("Read config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Parse config {}", path.display()))
}

pub fn save_to(path: &Path, config: &Config) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(config)?)
        .with_context(|| format!("Write config {}", path.display()))?;
    Ok(())
}

pub fn load() -> Result<Config> {
    load_from(&config_path()?)
}

pub fn save(config: &Config) -> Result<()> {
    save_to(&config_path()?, config)
}
