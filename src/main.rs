// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use kakebo::client::GraphqlClient;
use kakebo::{cli, commands, config, session};

fn client() -> Result<GraphqlClient> {
    let endpoint = config::load()?.endpoint()?;
    GraphqlClient::new(endpoint, session::resolve()?)
}

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("auth", sub)) => commands::auth::handle(sub)?,
        Some(("config", sub)) => commands::config::handle(sub)?,
        Some(("record", sub)) => commands::records::handle(&client()?, sub)?,
        Some(("asset", sub)) => commands::assets::handle(&client()?, sub)?,
        Some(("category", sub)) => commands::categories::handle(&client()?, sub)?,
        Some(("tag", sub)) => commands::tags::handle(&client()?, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&client()?, sub)?,
        Some(("whoami", _)) => commands::whoami::handle(&client()?)?,
        Some(("doctor", _)) => commands::doctor::handle()?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
