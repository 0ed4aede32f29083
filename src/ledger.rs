// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Record, RecordType};
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("record {id} has unknown record type '{literal}'")]
    UnknownRecordType { id: String, literal: String },
    #[error("record id {id} appears more than once")]
    DuplicateRecordId { id: String },
}

/// A record annotated with its signed balance contribution and the running
/// total after it was applied.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerEntry {
    #[serde(flatten)]
    pub record: Record,
    pub delta: i64,
    pub running: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyLedger {
    pub entries: Vec<LedgerEntry>,
    pub total_income: i64,
    pub total_expense: i64,
    pub net: i64,
    pub opening_balance: i64,
    pub closing_balance: i64,
}

/// Signed total-balance contribution of a single record. Income adds, expense
/// subtracts, transfer moves value between two assets and nets to zero. A
/// transfer missing a leg is malformed upstream data; it still counts as zero
/// so the view does not fall over on it.
fn delta_for(kind: RecordType, record: &Record) -> i64 {
    match kind {
        RecordType::Income => record
            .asset_change_income
            .as_ref()
            .map(|c| c.amount)
            .unwrap_or(0),
        RecordType::Expense => record
            .asset_change_expense
            .as_ref()
            .map(|c| -c.amount.abs())
            .unwrap_or(0),
        RecordType::Transfer => 0,
    }
}

/// Order an unordered month of records chronologically and annotate each with
/// its delta and the running balance, starting from `opening_balance`.
///
/// The sort is stable, so records sharing a timestamp keep their input order.
/// Fails without a partial result when a record carries an unknown type
/// literal or a duplicate id.
pub fn aggregate(opening_balance: i64, records: &[Record]) -> Result<MonthlyLedger, LedgerError> {
    let mut seen = HashSet::new();
    let mut typed: Vec<(RecordType, &Record)> = Vec::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id.as_str()) {
            return Err(LedgerError::DuplicateRecordId {
                id: record.id.clone(),
            });
        }
        let kind = RecordType::parse(&record.record_type).ok_or_else(|| {
            LedgerError::UnknownRecordType {
                id: record.id.clone(),
                literal: record.record_type.clone(),
            }
        })?;
        typed.push((kind, record));
    }

    typed.sort_by_key(|(_, r)| r.at);

    let mut total_income = 0i64;
    let mut total_expense = 0i64;
    for (kind, record) in &typed {
        match kind {
            RecordType::Income => {
                total_income += record
                    .asset_change_income
                    .as_ref()
                    .map(|c| c.amount)
                    .unwrap_or(0);
            }
            RecordType::Expense => {
                total_expense += record
                    .asset_change_expense
                    .as_ref()
                    .map(|c| c.amount.abs())
                    .unwrap_or(0);
            }
            RecordType::Transfer => {}
        }
    }

    let mut running = opening_balance;
    let entries = typed
        .into_iter()
        .map(|(kind, record)| {
            let delta = delta_for(kind, record);
            running += delta;
            LedgerEntry {
                record: record.clone(),
                delta,
                running,
            }
        })
        .collect::<Vec<_>>();

    let closing_balance = entries.last().map(|e| e.running).unwrap_or(opening_balance);
    Ok(MonthlyLedger {
        entries,
        total_income,
        total_expense,
        net: total_income - total_expense,
        opening_balance,
        closing_balance,
    })
}

/// Build the ledger from the server-reported end-of-range total instead of an
/// opening balance. The server owns the authoritative figure; the opening is
/// derived as `closing - net` so the last running balance always reconciles
/// with what the server said.
pub fn aggregate_from_closing(
    closing_balance: i64,
    records: &[Record],
) -> Result<MonthlyLedger, LedgerError> {
    let net = aggregate(0, records)?.net;
    aggregate(closing_balance - net, records)
}

/// A (year, month) display window with calendar rollover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub year: i32,
    pub month: u32,
}

impl MonthWindow {
    /// Fold an out-of-range month back into the calendar: month 0 is December
    /// of the previous year, month 13 is January of the next.
    pub fn normalized(year: i32, month: i32) -> Self {
        let zero_based = month - 1;
        let year = year + zero_based.div_euclid(12);
        let month = (zero_based.rem_euclid(12) + 1) as u32;
        Self { year, month }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let (y, m) = s.split_once('-')?;
        let year: i32 = y.parse().ok()?;
        let month: u32 = m.parse().ok()?;
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    pub fn prev(&self) -> Self {
        Self::normalized(self.year, self.month as i32 - 1)
    }

    pub fn next(&self) -> Self {
        Self::normalized(self.year, self.month as i32 + 1)
    }
}

impl std::fmt::Display for MonthWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
