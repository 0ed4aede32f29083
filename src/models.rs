// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record kind as the server defines it. On the wire `Record.record_type`
/// stays a raw string so an unrecognized literal can be reported together
/// with the record id instead of failing inside deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordType {
    Income,
    Expense,
    Transfer,
}

impl RecordType {
    pub fn parse(literal: &str) -> Option<Self> {
        match literal {
            "INCOME" => Some(Self::Income),
            "EXPENSE" => Some(Self::Expense),
            "TRANSFER" => Some(Self::Transfer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
            Self::Transfer => "TRANSFER",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetRef {
    pub id: String,
    pub name: String,
}

/// One leg of a record: the asset touched and the amount moved on it.
/// Amounts are whole yen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetChange {
    pub asset: AssetRef,
    pub amount: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub record_type: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub at: DateTime<Utc>,
    #[serde(default)]
    pub asset_change_income: Option<AssetChange>,
    #[serde(default)]
    pub asset_change_expense: Option<AssetChange>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Record {
    /// The text shown in a record's "asset" column: income leg for income,
    /// expense leg for expense, `from -> to` pair for transfer.
    pub fn asset_label(&self) -> String {
        match RecordType::parse(&self.record_type) {
            Some(RecordType::Income) => self
                .asset_change_income
                .as_ref()
                .map(|c| c.asset.name.clone())
                .unwrap_or_default(),
            Some(RecordType::Expense) => self
                .asset_change_expense
                .as_ref()
                .map(|c| c.asset.name.clone())
                .unwrap_or_default(),
            _ => {
                let from = self
                    .asset_change_expense
                    .as_ref()
                    .map(|c| c.asset.name.as_str())
                    .unwrap_or("");
                let to = self
                    .asset_change_income
                    .as_ref()
                    .map(|c| c.asset.name.as_str())
                    .unwrap_or("");
                format!("{} -> {}", from, to)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<CategoryRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub assets: Vec<AssetRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    #[serde(default)]
    pub start_cursor: Option<String>,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

/// Outcome of reconciling one user-supplied tag name against the known tags.
/// The mutation surface takes names either way; the split only tells the
/// caller whether the server will attach an existing tag or create one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagResolution {
    Existing(Tag),
    New(String),
}

impl TagResolution {
    pub fn name(&self) -> &str {
        match self {
            Self::Existing(tag) => &tag.name,
            Self::New(name) => name,
        }
    }
}

/// Pure local lookup of tag names against the fetched tag list. Matching is
/// exact on name; unresolved names pass through as implicit-create intent.
pub fn resolve_tag_names(names: &[String], existing: &[Tag]) -> Vec<TagResolution> {
    names
        .iter()
        .map(|name| {
            existing
                .iter()
                .find(|t| t.name == *name)
                .map(|t| TagResolution::Existing(t.clone()))
                .unwrap_or_else(|| TagResolution::New(name.clone()))
        })
        .collect()
}

/// Split a comma-separated tag entry into trimmed, non-empty names.
pub fn split_tag_input(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
