// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::GraphqlClient;
use crate::utils::pretty_table;
use anyhow::Result;
use chrono::Utc;

pub fn handle() -> Result<()> {
    let mut rows = Vec::new();

    // 1) Endpoint configured?
    let config = crate::config::load()?;
    let endpoint = match config.endpoint() {
        Ok(url) => Some(url),
        Err(_) => {
            rows.push(vec![
                "no_endpoint".into(),
                "run 'kakebo config set-url <URL>'".into(),
            ]);
            None
        }
    };

    // 2) Usable credential?
    let session = crate::session::resolve()?;
    if session.is_none() {
        let detail = match crate::session::load()? {
            Some(s) if s.is_expired_at(Utc::now()) => "stored session expired; log in again",
            _ => "no session; run 'kakebo auth login'",
        };
        rows.push(vec!["no_session".into(), detail.into()]);
    }

    // 3) Round trip, only worth attempting when 1) and 2) hold.
    if let (Some(endpoint), Some(session)) = (endpoint, session) {
        let client = GraphqlClient::new(endpoint, Some(session))?;
        if let Err(e) = client.user() {
            rows.push(vec!["server_unreachable".into(), e.to_string()]);
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
