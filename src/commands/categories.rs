// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::GraphqlClient;
use crate::models::AssetCategory;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Result, bail};

pub fn handle(client: &GraphqlClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let category = client.create_asset_category(name)?;
            println!("Added category '{}' ({})", category.name, category.id);
        }
        Some(("list", sub)) => {
            let categories = client.asset_categories()?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &categories)? {
                let rows = categories
                    .iter()
                    .map(|c| {
                        vec![
                            c.id.clone(),
                            c.name.clone(),
                            c.assets
                                .iter()
                                .map(|a| a.name.as_str())
                                .collect::<Vec<_>>()
                                .join(", "),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["ID", "Name", "Assets"], rows));
            }
        }
        Some(("edit", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let name = sub.get_one::<String>("name").unwrap();
            let category = client.update_asset_category(id, name)?;
            println!("Updated category '{}' ({})", category.name, category.id);
        }
        Some(("rm", sub)) => rm(client, sub)?,
        _ => {}
    }
    Ok(())
}

/// The server refuses to delete a category that assets still reference; the
/// same check runs here so the user gets the asset list instead of a bare
/// server error.
pub fn ensure_deletable(category: &AssetCategory) -> Result<()> {
    if !category.assets.is_empty() {
        bail!(
            "Category '{}' still has {} asset(s): {}. Reassign them first.",
            category.name,
            category.assets.len(),
            category
                .assets
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    Ok(())
}

fn rm(client: &GraphqlClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let categories = client.asset_categories()?;
    let Some(category) = categories.iter().find(|c| &c.id == id) else {
        bail!("Category '{}' not found", id);
    };
    ensure_deletable(category)?;
    client.delete_asset_category(id)?;
    println!("Removed category {}", id);
    Ok(())
}
