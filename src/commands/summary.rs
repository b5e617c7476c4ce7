// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{month_totals, year_summary};
use crate::db;
use crate::display::fmt_cents;
use crate::filter::FilterOpts;
use crate::lookup::CategoryLookup;
use crate::models::CategoryYear;
use crate::utils::{maybe_print_json, parse_month, pretty_table, render_rows};
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, lookup: &CategoryLookup, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("year", sub)) => {
            let year = *sub.get_one::<i32>("year").unwrap();
            let summary = year_rows(conn, lookup, year)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &summary)? {
                println!("{}", render_rows(&CategoryYear::HEADERS, &summary, lookup));
            }
        }
        Some(("month", sub)) => {
            let (year, month) = parse_month(sub.get_one::<String>("month").unwrap())?;
            let data = month_rows(conn, lookup, year, month)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
                let rows = data
                    .iter()
                    .map(|r| vec![r.category.clone(), fmt_cents(r.total)])
                    .collect();
                println!("{}", pretty_table(&["Category", "Total"], rows));
            }
        }
        _ => {}
    }
    Ok(())
}

pub fn year_rows(conn: &Connection, lookup: &CategoryLookup, year: i32) -> Result<Vec<CategoryYear>> {
    let records = db::query_records(conn, &FilterOpts::new().for_year(year))?;
    Ok(year_summary(lookup, year, &records))
}

#[derive(Debug, Serialize)]
pub struct MonthRow {
    pub category: String,
    pub total: i64,
}

pub fn month_rows(
    conn: &Connection,
    lookup: &CategoryLookup,
    year: i32,
    month: u32,
) -> Result<Vec<MonthRow>> {
    let records = db::query_records(conn, &FilterOpts::new().for_year(year))?;
    Ok(month_totals(lookup, year, month, &records)
        .into_iter()
        .map(|(c, total)| MonthRow {
            category: c.name.clone(),
            total,
        })
        .collect())
}
