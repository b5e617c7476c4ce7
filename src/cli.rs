// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

fn json_args(cmd: Command) -> Command {
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
            .conflicts_with("json")
            .help("Print as JSON lines"),
    )
}

fn range_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("from").long("from").help("First date, YYYY-MM-DD"))
        .arg(Arg::new("to").long("to").help("Last date, YYYY-MM-DD"))
        .arg(
            Arg::new("min")
                .long("min")
                .allow_negative_numbers(true)
                .help("Minimum amount in major units"),
        )
        .arg(
            Arg::new("max")
                .long("max")
                .allow_negative_numbers(true)
                .help("Maximum amount in major units"),
        )
}

fn id_arg() -> Arg {
    Arg::new("id")
        .long("id")
        .required(true)
        .value_parser(value_parser!(i64))
}

fn record_cmd() -> Command {
    Command::new("record")
        .about("Ledger records")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Add a record")
                .arg(Arg::new("date").long("date").required(true))
                .arg(Arg::new("category").long("category").required(true))
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .required(true)
                        .allow_negative_numbers(true)
                        .help("Signed amount in major units within -100000..100000, e.g. -12.50"),
                )
                .arg(Arg::new("desc").long("desc").default_value("")),
        )
        .subcommand(json_args(range_args(
            Command::new("list").about("List records").arg(
                Arg::new("category")
                    .long("category")
                    .action(ArgAction::Append)
                    .help("Restrict to category (repeatable)"),
            ),
        )))
        .subcommand(
            Command::new("edit")
                .about("Update fields of a record")
                .arg(id_arg())
                .arg(Arg::new("date").long("date"))
                .arg(Arg::new("category").long("category"))
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .allow_negative_numbers(true),
                )
                .arg(Arg::new("desc").long("desc")),
        )
        .subcommand(Command::new("rm").about("Remove a record").arg(id_arg()))
}

fn category_cmd() -> Command {
    Command::new("category")
        .about("Record categories")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Add a category")
                .arg(Arg::new("name").long("name").required(true))
                .arg(
                    Arg::new("income")
                        .long("income")
                        .action(ArgAction::SetTrue)
                        .help("Classify as income rather than expenditure"),
                )
                .arg(Arg::new("desc").long("desc").default_value("")),
        )
        .subcommand(json_args(Command::new("list").about("List categories")))
        .subcommand(
            Command::new("rm")
                .about("Remove a category")
                .arg(Arg::new("name").long("name").required(true)),
        )
}

fn investment_cmd() -> Command {
    Command::new("investment")
        .about("Investment lots")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Add an investment lot")
                .arg(Arg::new("date").long("date").required(true))
                .arg(Arg::new("code").long("code").required(true))
                .arg(
                    Arg::new("price")
                        .long("price")
                        .required(true)
                        .help("Unit price in major units, at most 100000"),
                )
                .arg(Arg::new("qty").long("qty").required(true)),
        )
        .subcommand(json_args(range_args(
            Command::new("list")
                .about("List investment lots")
                .arg(Arg::new("code").long("code")),
        )))
        .subcommand(
            Command::new("rm")
                .about("Remove an investment lot")
                .arg(id_arg()),
        )
}

fn summary_cmd() -> Command {
    Command::new("summary")
        .about("Per-category totals")
        .subcommand_required(true)
        .subcommand(json_args(
            Command::new("year").about("Monthly totals for a year").arg(
                Arg::new("year")
                    .long("year")
                    .required(true)
                    .value_parser(value_parser!(i32)),
            ),
        ))
        .subcommand(json_args(
            Command::new("month")
                .about("Totals for one month")
                .arg(Arg::new("month").long("month").required(true).help("YYYY-MM")),
        ))
}

pub fn build_cli() -> Command {
    Command::new("tally")
        .version(clap::crate_version!())
        .about("Personal finance ledger")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Ledger database file (defaults to the platform data dir)"),
        )
        .subcommand(Command::new("init").about("Create the ledger database"))
        .subcommand(record_cmd())
        .subcommand(category_cmd())
        .subcommand(investment_cmd())
        .subcommand(summary_cmd())
}
