// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::{GraphqlClient, RecordFilter, RecordInput, TransferInput};
use crate::ledger;
use crate::models::{Record, RecordType, TagResolution, resolve_tag_names, split_tag_input};
use crate::utils::{
    fmt_yen, fmt_yen_signed, maybe_print_json, parse_datetime, parse_month, pretty_table,
};
use anyhow::{Context, Result, bail};
use chrono::Utc;

pub fn handle(client: &GraphqlClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("month", sub)) => month(client, sub),
        Some(("show", sub)) => show(client, sub),
        Some(("add", sub)) => add(client, sub),
        Some(("edit", sub)) => edit(client, sub),
        Some(("rm", sub)) => rm(client, sub),
        _ => Ok(()),
    }
}

fn filter_from_args(sub: &clap::ArgMatches) -> RecordFilter {
    let collect = |id: &str| -> Vec<String> {
        sub.get_many::<String>(id)
            .map(|v| v.map(|s| s.to_string()).collect())
            .unwrap_or_default()
    };
    RecordFilter {
        tag_names: collect("tag"),
        asset_ids: collect("asset"),
        record_types: collect("type")
            .iter()
            .filter_map(|s| RecordType::parse(s))
            .collect(),
    }
}

fn month(client: &GraphqlClient, sub: &clap::ArgMatches) -> Result<()> {
    let window = parse_month(sub.get_one::<String>("month").unwrap())?;
    let filter = filter_from_args(sub);
    let page = client.monthly_records(window, &filter)?;

    // The server reports total assets at the end of the range; seed the fold
    // so the last running balance reconciles with that figure.
    let ledger = ledger::aggregate_from_closing(page.total_assets, &page.nodes)?;

    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if maybe_print_json(json_flag, jsonl_flag, &ledger)? {
        return Ok(());
    }

    println!("Records for {}", window);
    if !filter.is_empty() {
        let mut parts = Vec::new();
        for t in &filter.tag_names {
            parts.push(format!("tag={}", t));
        }
        for a in &filter.asset_ids {
            parts.push(format!("asset={}", a));
        }
        for t in &filter.record_types {
            parts.push(format!("type={}", t));
        }
        println!("Filters: {}", parts.join(", "));
    }
    println!(
        "Income {}  Expense {}  Net {}  Total assets {}",
        fmt_yen(ledger.total_income),
        fmt_yen(ledger.total_expense),
        fmt_yen_signed(ledger.net),
        fmt_yen(ledger.closing_balance),
    );

    if ledger.entries.is_empty() {
        println!("No records this month.");
    } else {
        let rows: Vec<Vec<String>> = ledger
            .entries
            .iter()
            .map(|e| {
                vec![
                    e.record.at.format("%Y-%m-%d %H:%M").to_string(),
                    e.record.record_type.clone(),
                    e.record.title.clone(),
                    e.record.asset_label(),
                    fmt_yen_signed(e.delta),
                    fmt_yen(e.running),
                    e.record
                        .tags
                        .iter()
                        .map(|t| t.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Type", "Title", "Asset", "Amount", "Balance", "Tags"],
                rows,
            )
        );
    }
    if page.page_info.has_next_page {
        println!("More than 100 records this month; only the first page is shown.");
    }
    println!(
        "Previous: kakebo record month {}   Next: kakebo record month {}",
        window.prev(),
        window.next()
    );
    Ok(())
}

fn print_record(record: &Record) {
    println!("{} [{}] {}", record.id, record.record_type, record.title);
    println!("  at: {}", record.at.to_rfc3339());
    if let Some(desc) = record.description.as_deref().filter(|d| !d.is_empty()) {
        println!("  description: {}", desc);
    }
    if let Some(change) = &record.asset_change_income {
        println!(
            "  in:  {} {}",
            change.asset.name,
            fmt_yen_signed(change.amount.abs())
        );
    }
    if let Some(change) = &record.asset_change_expense {
        println!(
            "  out: {} {}",
            change.asset.name,
            fmt_yen_signed(-change.amount.abs())
        );
    }
    if !record.tags.is_empty() {
        println!(
            "  tags: {}",
            record
                .tags
                .iter()
                .map(|t| t.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
}

fn show(client: &GraphqlClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let record = client.record(id)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &record)? {
        print_record(&record);
    }
    Ok(())
}

struct NewRecordFields {
    title: String,
    description: String,
    at: chrono::DateTime<Utc>,
    amount: i64,
    tags: Vec<String>,
}

/// Gather and validate the fields shared by all three record kinds. Rejected
/// input never reaches the server.
fn gather_fields(client: &GraphqlClient, sub: &clap::ArgMatches) -> Result<NewRecordFields> {
    let title = sub
        .get_one::<String>("title")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    if title.is_empty() {
        bail!("--title must not be empty");
    }
    let amount = *sub
        .get_one::<i64>("amount")
        .context("--amount is required")?;
    if amount <= 0 {
        bail!("--amount must be a positive number of yen");
    }
    let at = match sub.get_one::<String>("at") {
        Some(s) => parse_datetime(s)?,
        None => Utc::now(),
    };
    let tags = sub
        .get_one::<String>("tags")
        .map(|s| split_tag_input(s))
        .unwrap_or_default();
    if !tags.is_empty() {
        let new_names: Vec<String> = resolve_tag_names(&tags, &client.tags()?)
            .into_iter()
            .filter_map(|r| match r {
                TagResolution::New(name) => Some(name),
                TagResolution::Existing(_) => None,
            })
            .collect();
        if !new_names.is_empty() {
            println!("New tags will be created: {}", new_names.join(", "));
        }
    }
    Ok(NewRecordFields {
        title,
        description: sub
            .get_one::<String>("description")
            .cloned()
            .unwrap_or_default(),
        at,
        amount,
        tags,
    })
}

fn add(client: &GraphqlClient, m: &clap::ArgMatches) -> Result<()> {
    let record = match m.subcommand() {
        Some(("income", sub)) => {
            let f = gather_fields(client, sub)?;
            client.create_income_record(&RecordInput {
                id: None,
                title: f.title,
                description: f.description,
                at: f.at,
                asset_id: sub.get_one::<String>("asset").unwrap().clone(),
                amount: f.amount,
                tags: f.tags,
            })?
        }
        Some(("expense", sub)) => {
            let f = gather_fields(client, sub)?;
            client.create_expense_record(&RecordInput {
                id: None,
                title: f.title,
                description: f.description,
                at: f.at,
                asset_id: sub.get_one::<String>("asset").unwrap().clone(),
                amount: f.amount,
                tags: f.tags,
            })?
        }
        Some(("transfer", sub)) => {
            let f = gather_fields(client, sub)?;
            let from = sub.get_one::<String>("from").unwrap().clone();
            let to = sub.get_one::<String>("to").unwrap().clone();
            if from == to {
                bail!("--from and --to must name different assets");
            }
            client.create_transfer_record(&TransferInput {
                id: None,
                title: f.title,
                description: f.description,
                at: f.at,
                from_asset_id: from,
                to_asset_id: to,
                amount: f.amount,
                tags: f.tags,
            })?
        }
        _ => return Ok(()),
    };
    println!("Created record {}", record.id);
    print_record(&record);
    Ok(())
}

fn edit(client: &GraphqlClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let existing = client.record(id)?;
    let kind = RecordType::parse(&existing.record_type).ok_or_else(|| {
        ledger::LedgerError::UnknownRecordType {
            id: existing.id.clone(),
            literal: existing.record_type.clone(),
        }
    })?;

    let title = sub
        .get_one::<String>("title")
        .cloned()
        .unwrap_or_else(|| existing.title.clone());
    if title.trim().is_empty() {
        bail!("--title must not be empty");
    }
    let description = sub
        .get_one::<String>("description")
        .cloned()
        .or_else(|| existing.description.clone())
        .unwrap_or_default();
    let at = match sub.get_one::<String>("at") {
        Some(s) => parse_datetime(s)?,
        None => existing.at,
    };
    let tags = match sub.get_one::<String>("tags") {
        Some(s) => split_tag_input(s),
        None => existing.tags.iter().map(|t| t.name.clone()).collect(),
    };
    let amount_of = |change: &Option<crate::models::AssetChange>| {
        change.as_ref().map(|c| c.amount.abs()).unwrap_or(0)
    };

    let updated = match kind {
        RecordType::Income | RecordType::Expense => {
            let leg = if kind == RecordType::Income {
                &existing.asset_change_income
            } else {
                &existing.asset_change_expense
            };
            let amount = sub
                .get_one::<i64>("amount")
                .copied()
                .unwrap_or_else(|| amount_of(leg));
            if amount <= 0 {
                bail!("--amount must be a positive number of yen");
            }
            let asset_id = sub
                .get_one::<String>("asset")
                .cloned()
                .or_else(|| leg.as_ref().map(|c| c.asset.id.clone()))
                .context("record has no asset leg; pass --asset")?;
            let input = RecordInput {
                id: Some(existing.id.clone()),
                title,
                description,
                at,
                asset_id,
                amount,
                tags,
            };
            if kind == RecordType::Income {
                client.update_income_record(&input)?
            } else {
                client.update_expense_record(&input)?
            }
        }
        RecordType::Transfer => {
            let amount = sub
                .get_one::<i64>("amount")
                .copied()
                .unwrap_or_else(|| amount_of(&existing.asset_change_expense));
            if amount <= 0 {
                bail!("--amount must be a positive number of yen");
            }
            let from_asset_id = sub
                .get_one::<String>("from")
                .cloned()
                .or_else(|| {
                    existing
                        .asset_change_expense
                        .as_ref()
                        .map(|c| c.asset.id.clone())
                })
                .context("transfer has no source leg; pass --from")?;
            let to_asset_id = sub
                .get_one::<String>("to")
                .cloned()
                .or_else(|| {
                    existing
                        .asset_change_income
                        .as_ref()
                        .map(|c| c.asset.id.clone())
                })
                .context("transfer has no destination leg; pass --to")?;
            if from_asset_id == to_asset_id {
                bail!("--from and --to must name different assets");
            }
            client.update_transfer_record(&TransferInput {
                id: Some(existing.id.clone()),
                title,
                description,
                at,
                from_asset_id,
                to_asset_id,
                amount,
                tags,
            })?
        }
    };
    println!("Updated record {}", updated.id);
    print_record(&updated);
    Ok(())
}

fn rm(client: &GraphqlClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    client.delete_record(id)?;
    println!("Deleted record {}", id);
    Ok(())
}
