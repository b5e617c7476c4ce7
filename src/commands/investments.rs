// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::range_opts;
use crate::db;
use crate::filter::FilterOpts;
use crate::lookup::CategoryLookup;
use crate::models::Investment;
use crate::utils::{maybe_print_json, parse_cents, parse_date, parse_decimal, render_rows};
use anyhow::{Result, bail};
use rust_decimal::Decimal;
use rusqlite::Connection;

pub fn handle(conn: &Connection, lookup: &CategoryLookup, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => {
            let investments = query_rows(conn, sub)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &investments)? {
                println!("{}", render_rows(&Investment::HEADERS, &investments, lookup));
                let total: Decimal = investments.iter().map(Investment::value).sum();
                println!("Total value: ${:.2}", total.round_dp(2));
            }
        }
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            if !db::delete_investment(conn, id)? {
                bail!("Investment {} not found", id);
            }
            println!("Removed investment {}", id);
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let code = sub.get_one::<String>("code").unwrap().trim().to_uppercase();
    if code.is_empty() {
        bail!("Investment code must not be empty");
    }
    let qty = parse_decimal(sub.get_one::<String>("qty").unwrap())?;
    if qty.is_sign_negative() {
        bail!("Quantity must not be negative");
    }
    let inv = Investment {
        id: 0,
        date: parse_date(sub.get_one::<String>("date").unwrap())?,
        code,
        unitprice: parse_cents(sub.get_one::<String>("price").unwrap())?,
        qty,
    };
    db::insert_investment(conn, &inv)?;
    println!(
        "Recorded {} x {} @ ${:.2}",
        inv.qty,
        inv.code,
        Decimal::new(inv.unitprice, 2)
    );
    Ok(())
}

pub fn filter_from_args(sub: &clap::ArgMatches) -> Result<FilterOpts> {
    let opts = range_opts(FilterOpts::new(), sub)?;
    Ok(match sub.get_one::<String>("code") {
        Some(code) => opts.with_code(code.trim().to_uppercase()),
        None => opts,
    })
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Investment>> {
    let opts = filter_from_args(sub)?;
    Ok(db::query_investments(conn, &opts)?)
}
