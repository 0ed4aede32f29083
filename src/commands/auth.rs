// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::{self, Session};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("login", sub)) => {
            let token = sub.get_one::<String>("token").unwrap().trim().to_string();
            let expires_at = sub
                .get_one::<String>("expires-at")
                .map(|s| {
                    DateTime::parse_from_rfc3339(s.trim())
                        .map(|t| t.with_timezone(&Utc))
                        .with_context(|| format!("Invalid expiry '{}', expected RFC 3339", s))
                })
                .transpose()?;
            let session = Session::new(token, expires_at);
            session::save(&session)?;
            println!("Session stored at {}", session::session_path()?.display());
        }
        Some(("status", _)) => status()?,
        Some(("logout", _)) => {
            if session::clear()? {
                println!("Session removed.");
            } else {
                println!("No stored session.");
            }
        }
        _ => {}
    }
    Ok(())
}

fn status() -> Result<()> {
    match session::load()? {
        None => println!("No stored session. Run 'kakebo auth login --token <TOKEN>'."),
        Some(session) => {
            let now = Utc::now();
            println!("Session obtained at {}", session.obtained_at.to_rfc3339());
            match session.expires_at {
                Some(t) if session.is_expired_at(now) => {
                    println!("Expired at {} (treated as logged out)", t.to_rfc3339());
                }
                Some(t) => println!("Valid until {}", t.to_rfc3339()),
                None => println!("No recorded expiry."),
            }
        }
    }
    Ok(())
}
