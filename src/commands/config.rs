// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-url", sub)) => {
            let url = sub.get_one::<String>("url").unwrap().trim().to_string();
            let mut config = crate::config::load()?;
            config.graphql_url = Some(url.clone());
            crate::config::save(&config)?;
            println!("GraphQL endpoint set to {}", url);
        }
        Some(("show", _)) => {
            let config = crate::config::load()?;
            println!("Config file: {}", crate::config::config_path()?.display());
            match config.endpoint() {
                Ok(url) => println!("Endpoint: {}", url),
                Err(_) => println!("Endpoint: (not configured)"),
            }
            if std::env::var("KAKEBO_GRAPHQL_URL").is_ok() {
                println!("Endpoint overridden by KAKEBO_GRAPHQL_URL.");
            }
        }
        _ => {}
    }
    Ok(())
}
