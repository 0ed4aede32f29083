// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use kakebo::commands::exporter::{CSV_HEADER, csv_row};
use kakebo::ledger::aggregate;
use kakebo::models::{AssetChange, AssetRef, Record, Tag};

fn expense(id: &str, secs: i64, amount: i64) -> Record {
    Record {
        id: id.into(),
        record_type: "EXPENSE".into(),
        title: "lunch".into(),
        description: Some("ramen".into()),
        at: Utc.timestamp_opt(secs, 0).unwrap(),
        asset_change_income: None,
        asset_change_expense: Some(AssetChange {
            asset: AssetRef {
                id: "a1".into(),
                name: "Wallet".into(),
            },
            amount: -amount,
        }),
        tags: vec![
            Tag {
                id: "t1".into(),
                name: "food".into(),
            },
            Tag {
                id: "t2".into(),
                name: "daily".into(),
            },
        ],
    }
}

#[test]
fn csv_row_matches_header_shape() {
    let ledger = aggregate(1000, &[expense("e1", 100, 300)]).unwrap();
    let row = csv_row(&ledger.entries[0]);
    assert_eq!(row.len(), CSV_HEADER.len());

    assert_eq!(row[0], Utc.timestamp_opt(100, 0).unwrap().to_rfc3339());
    assert_eq!(row[1], "EXPENSE");
    assert_eq!(row[2], "lunch");
    assert_eq!(row[3], "ramen");
    assert_eq!(row[4], "Wallet");
    assert_eq!(row[5], "-300");
    assert_eq!(row[6], "700");
    assert_eq!(row[7], "food, daily");
}

#[test]
fn csv_row_running_balance_accumulates() {
    let records = vec![expense("e1", 100, 300), expense("e2", 200, 50)];
    let ledger = aggregate(1000, &records).unwrap();
    let rows: Vec<[String; 8]> = ledger.entries.iter().map(csv_row).collect();
    assert_eq!(rows[0][6], "700");
    assert_eq!(rows[1][6], "650");
}

#[test]
fn missing_description_exports_empty_cell() {
    let mut record = expense("e1", 100, 300);
    record.description = None;
    let ledger = aggregate(0, &[record]).unwrap();
    assert_eq!(csv_row(&ledger.entries[0])[3], "");
}
