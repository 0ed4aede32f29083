// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn record_field_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("title").long("title").help("Record title"))
        .arg(
            Arg::new("description")
                .long("description")
                .help("Free-form description"),
        )
        .arg(
            Arg::new("amount")
                .long("amount")
                .value_parser(value_parser!(i64))
                .help("Amount in whole yen (non-negative)"),
        )
        .arg(
            Arg::new("at")
                .long("at")
                .help("Timestamp (RFC 3339, 'YYYY-MM-DD HH:MM:SS', or YYYY-MM-DD); defaults to now"),
        )
        .arg(
            Arg::new("tags")
                .long("tags")
                .help("Comma-separated tag names; unknown names are created server-side"),
        )
}

pub fn build_cli() -> Command {
    Command::new("kakebo")
        .about("Household ledger client: records, assets, categories and tags over GraphQL")
        .subcommand_required(false)
        .subcommand(
            Command::new("auth")
                .about("Manage the stored API session")
                .subcommand(
                    Command::new("login")
                        .about("Store a bearer token obtained from the identity provider")
                        .arg(
                            Arg::new("token")
                                .long("token")
                                .required(true)
                                .help("Access token"),
                        )
                        .arg(
                            Arg::new("expires-at")
                                .long("expires-at")
                                .help("Token expiry (RFC 3339); expired sessions are ignored"),
                        ),
                )
                .subcommand(Command::new("status").about("Show the stored session"))
                .subcommand(Command::new("logout").about("Remove the stored session")),
        )
        .subcommand(
            Command::new("config")
                .about("Client configuration")
                .subcommand(
                    Command::new("set-url")
                        .about("Set the GraphQL endpoint URL")
                        .arg(Arg::new("url").required(true)),
                )
                .subcommand(Command::new("show").about("Show the effective configuration")),
        )
        .subcommand(
            Command::new("record")
                .about("Financial records")
                .subcommand(json_flags(
                    Command::new("month")
                        .about("Monthly view with running balance")
                        .arg(Arg::new("month").required(true).help("Window as YYYY-MM"))
                        .arg(
                            Arg::new("tag")
                                .long("tag")
                                .action(ArgAction::Append)
                                .help("Filter by tag name (repeatable)"),
                        )
                        .arg(
                            Arg::new("asset")
                                .long("asset")
                                .action(ArgAction::Append)
                                .help("Filter by asset id (repeatable)"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .action(ArgAction::Append)
                                .value_parser(["INCOME", "EXPENSE", "TRANSFER"])
                                .help("Filter by record type (repeatable)"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("show")
                        .about("Show a single record")
                        .arg(Arg::new("id").required(true)),
                ))
                .subcommand(
                    Command::new("add")
                        .about("Create a record")
                        .subcommand(record_field_args(
                            Command::new("income")
                                .about("Money coming in")
                                .arg(
                                    Arg::new("asset")
                                        .long("asset")
                                        .required(true)
                                        .help("Receiving asset id"),
                                ),
                        ))
                        .subcommand(record_field_args(
                            Command::new("expense")
                                .about("Money going out")
                                .arg(
                                    Arg::new("asset")
                                        .long("asset")
                                        .required(true)
                                        .help("Paying asset id"),
                                ),
                        ))
                        .subcommand(record_field_args(
                            Command::new("transfer")
                                .about("Move value between two assets")
                                .arg(
                                    Arg::new("from")
                                        .long("from")
                                        .required(true)
                                        .help("Source asset id"),
                                )
                                .arg(
                                    Arg::new("to")
                                        .long("to")
                                        .required(true)
                                        .help("Destination asset id"),
                                ),
                        )),
                )
                .subcommand(
                    record_field_args(
                        Command::new("edit")
                            .about("Update an existing record (fields left out keep their value)")
                            .arg(Arg::new("id").required(true))
                            .arg(
                                Arg::new("asset")
                                    .long("asset")
                                    .help("Asset id (income/expense)"),
                            )
                            .arg(Arg::new("from").long("from").help("Source asset id (transfer)"))
                            .arg(Arg::new("to").long("to").help("Destination asset id (transfer)")),
                    )
                    .mut_arg("tags", |a| {
                        a.help(
                            "Comma-separated tag names replacing the current set; \
                             pass '' to clear all tags",
                        )
                    }),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a record")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("asset")
                .about("Assets (accounts, wallets, holdings)")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Asset category id"),
                        ),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(
                    Command::new("edit")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Asset category id"),
                        ),
                )
                .subcommand(Command::new("rm").arg(Arg::new("id").required(true))),
        )
        .subcommand(
            Command::new("category")
                .about("Asset categories")
                .subcommand(Command::new("add").arg(Arg::new("name").long("name").required(true)))
                .subcommand(json_flags(Command::new("list")))
                .subcommand(
                    Command::new("edit")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("name").long("name").required(true)),
                )
                .subcommand(Command::new("rm").arg(Arg::new("id").required(true))),
        )
        .subcommand(
            Command::new("tag")
                .about("Record tags")
                .subcommand(Command::new("add").arg(Arg::new("name").long("name").required(true)))
                .subcommand(json_flags(Command::new("list")))
                .subcommand(
                    Command::new("edit")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("name").long("name").required(true)),
                )
                .subcommand(Command::new("rm").arg(Arg::new("id").required(true))),
        )
        .subcommand(
            Command::new("export")
                .about("Export ledger data")
                .subcommand(
                    Command::new("month")
                        .about("Export one month's aggregated ledger")
                        .arg(Arg::new("month").required(true).help("Window as YYYY-MM"))
                        .arg(Arg::new("out").long("out").required(true).help("Output file"))
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .value_parser(["csv", "json"]),
                        ),
                ),
        )
        .subcommand(Command::new("whoami").about("Show the authenticated user"))
        .subcommand(Command::new("doctor").about("Check endpoint, session and connectivity"))
}
