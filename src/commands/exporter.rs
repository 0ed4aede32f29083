// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::{GraphqlClient, RecordFilter};
use crate::ledger::{self, LedgerEntry};
use crate::utils::parse_month;
use anyhow::Result;

pub const CSV_HEADER: [&str; 8] = [
    "at", "type", "title", "description", "asset", "delta", "running", "tags",
];

pub fn csv_row(entry: &LedgerEntry) -> [String; 8] {
    [
        entry.record.at.to_rfc3339(),
        entry.record.record_type.clone(),
        entry.record.title.clone(),
        entry.record.description.clone().unwrap_or_default(),
        entry.record.asset_label(),
        entry.delta.to_string(),
        entry.running.to_string(),
        entry
            .record
            .tags
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    ]
}

pub fn handle(client: &GraphqlClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("month", sub)) => export_month(client, sub),
        _ => Ok(()),
    }
}

fn export_month(client: &GraphqlClient, sub: &clap::ArgMatches) -> Result<()> {
    let window = parse_month(sub.get_one::<String>("month").unwrap())?;
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let page = client.monthly_records(window, &RecordFilter::default())?;
    let ledger = ledger::aggregate_from_closing(page.total_assets, &page.nodes)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(CSV_HEADER)?;
            for e in &ledger.entries {
                wtr.write_record(csv_row(e))?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&ledger)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} ledger to {}", window, out);
    Ok(())
}
