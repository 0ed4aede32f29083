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
            let tag = client.create_tag(name)?;
            println!("Added tag '{}' ({})", tag.name, tag.id);
        }
        Some(("list", sub)) => {
            let tags = client.tags()?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &tags)? {
                let rows = tags
                    .iter()
                    .map(|t| vec![t.id.clone(), t.name.clone()])
                    .collect();
                println!("{}", pretty_table(&["ID", "Name"], rows));
            }
        }
        Some(("edit", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let name = sub.get_one::<String>("name").unwrap();
            let tag = client.update_tag(id, name)?;
            println!("Updated tag '{}' ({})", tag.name, tag.id);
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            client.delete_tag(id)?;
            println!("Removed tag {}", id);
        }
        _ => {}
    }
    Ok(())
}
