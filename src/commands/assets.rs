// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::GraphqlClient;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(client: &GraphqlClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let category = sub.get_one::<String>("category").map(|s| s.as_str());
            let asset = client.create_asset(name, category)?;
            println!("Added asset '{}' ({})", asset.name, asset.id);
        }
        Some(("list", sub)) => {
            let assets = client.assets()?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &assets)? {
                let rows = assets
                    .iter()
                    .map(|a| {
                        vec![
                            a.id.clone(),
                            a.name.clone(),
                            a.category
                                .as_ref()
                                .map(|c| c.name.clone())
                                .unwrap_or_default(),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["ID", "Name", "Category"], rows));
            }
        }
        Some(("edit", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let name = sub.get_one::<String>("name").unwrap();
            let category = sub.get_one::<String>("category").map(|s| s.as_str());
            let asset = client.update_asset(id, name, category)?;
            println!("Updated asset '{}' ({})", asset.name, asset.id);
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            client.delete_asset(id)?;
            println!("Removed asset {}", id);
        }
        _ => {}
    }
    Ok(())
}
