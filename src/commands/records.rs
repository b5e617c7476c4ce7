// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::range_opts;
use crate::db;
use crate::display::fmt_cents;
use crate::filter::FilterOpts;
use crate::lookup::CategoryLookup;
use crate::models::Record;
use crate::utils::{maybe_print_json, parse_cents, parse_date, render_rows};
use anyhow::{Context, Result, bail};
use rusqlite::Connection;

pub fn handle(conn: &Connection, lookup: &CategoryLookup, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, lookup, sub)?,
        Some(("list", sub)) => list(conn, lookup, sub)?,
        Some(("edit", sub)) => edit(conn, lookup, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            if !db::delete_record(conn, id)? {
                bail!("Record {} not found", id);
            }
            println!("Removed record {}", id);
        }
        _ => {}
    }
    Ok(())
}

fn category_id(lookup: &CategoryLookup, name: &str) -> Result<i64> {
    lookup
        .id_for_name(name.trim())
        .with_context(|| format!("Category '{}' not found", name.trim()))
}

fn add(conn: &Connection, lookup: &CategoryLookup, sub: &clap::ArgMatches) -> Result<()> {
    let rec = Record {
        id: 0,
        date: parse_date(sub.get_one::<String>("date").unwrap())?,
        cat_id: category_id(lookup, sub.get_one::<String>("category").unwrap())?,
        desc: sub.get_one::<String>("desc").cloned().unwrap_or_default(),
        amt: parse_cents(sub.get_one::<String>("amount").unwrap())?,
    };
    let id = db::insert_record(conn, &rec)?;
    println!(
        "Recorded {} on {} under '{}' (id {})",
        fmt_cents(rec.amt),
        rec.date,
        lookup.name(rec.cat_id),
        id
    );
    Ok(())
}

fn edit(conn: &Connection, lookup: &CategoryLookup, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut rec = db::get_record(conn, id)?.with_context(|| format!("Record {} not found", id))?;
    if let Some(d) = sub.get_one::<String>("date") {
        rec.date = parse_date(d)?;
    }
    if let Some(c) = sub.get_one::<String>("category") {
        rec.cat_id = category_id(lookup, c)?;
    }
    if let Some(a) = sub.get_one::<String>("amount") {
        rec.amt = parse_cents(a)?;
    }
    if let Some(desc) = sub.get_one::<String>("desc") {
        rec.desc = desc.clone();
    }
    db::update_record(conn, &rec)?;
    println!("Updated record {}", id);
    Ok(())
}

fn list(conn: &Connection, lookup: &CategoryLookup, sub: &clap::ArgMatches) -> Result<()> {
    let records = query_rows(conn, lookup, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &records)? {
        println!("{}", render_rows(&Record::HEADERS, &records, lookup));
    }
    Ok(())
}

/// Build the filter described by `record list` arguments.
pub fn filter_from_args(lookup: &CategoryLookup, sub: &clap::ArgMatches) -> Result<FilterOpts> {
    let opts = range_opts(FilterOpts::new(), sub)?;
    let cat_ids = match sub.get_many::<String>("category") {
        Some(names) => names
            .map(|n| category_id(lookup, n))
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };
    Ok(opts.with_cat_ids(cat_ids))
}

pub fn query_rows(
    conn: &Connection,
    lookup: &CategoryLookup,
    sub: &clap::ArgMatches,
) -> Result<Vec<Record>> {
    let opts = filter_from_args(lookup, sub)?;
    Ok(db::query_records(conn, &opts)?)
}
