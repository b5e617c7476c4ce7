// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::{Datelike, NaiveDate};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::display::DataRow;
use crate::filter::{DEFAULT_MAX_COST, DEFAULT_MIN_COST};
use crate::lookup::CategoryLookup;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// `YYYY-MM` into (year, month).
pub fn parse_month(s: &str) -> Result<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok((d.year(), d.month()))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Major-unit money text (`12.34`, `-5`) into cents.
///
/// More than two decimals is rejected, as is anything outside the default
/// filter range: such an amount could be stored but never listed.
pub fn parse_cents(s: &str) -> Result<i64> {
    let d = parse_decimal(s)?;
    if d.round_dp(2) != d {
        return Err(anyhow!("Amount '{}' has more than two decimals", s.trim()));
    }
    let cents = d
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|c| c.to_i64())
        .filter(|c| (DEFAULT_MIN_COST * 100..=DEFAULT_MAX_COST * 100).contains(c))
        .ok_or_else(|| {
            anyhow!(
                "Amount '{}' is out of range ({} to {})",
                s.trim(),
                DEFAULT_MIN_COST,
                DEFAULT_MAX_COST
            )
        })?;
    Ok(cents)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn render_rows<T: DataRow>(headers: &[&str], items: &[T], lookup: &CategoryLookup) -> Table {
    let rows = items.iter().map(|i| i.spread_to_strings(lookup)).collect();
    pretty_table(headers, rows)
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
