// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Conversion of ledger entities into table cells.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::lookup::CategoryLookup;
use crate::models::{Category, CategoryYear, Investment, Record};

/// Anything that can be shown as one row of a table.
///
/// Column count and meaning are fixed per implementing type; renderers only
/// depend on this trait, never on the concrete entity.
pub trait DataRow {
    fn spread_to_strings(&self, lookup: &CategoryLookup) -> Vec<String>;
}

pub fn fmt_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Cents as `$` plus two decimals, e.g. `-150` -> `$-1.50`.
pub fn fmt_cents(cents: i64) -> String {
    format!("${:.2}", Decimal::new(cents, 2))
}

/// Cents as whole major units, rounded half to even.
pub fn fmt_cents_whole(cents: i64) -> String {
    let whole = Decimal::new(cents, 2).round_dp(0);
    if whole.is_zero() {
        return "$0".to_string();
    }
    format!("${}", whole)
}

pub fn income_label(is_income: bool) -> &'static str {
    if is_income { "Income" } else { "Expenditure" }
}

impl DataRow for Record {
    fn spread_to_strings(&self, lookup: &CategoryLookup) -> Vec<String> {
        vec![
            self.id.to_string(),
            fmt_date(self.date),
            lookup.name(self.cat_id).to_string(),
            self.desc.clone(),
            fmt_cents(self.amt),
        ]
    }
}

impl DataRow for Category {
    fn spread_to_strings(&self, _lookup: &CategoryLookup) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            income_label(self.is_income).to_string(),
            self.desc.clone(),
        ]
    }
}

impl DataRow for Investment {
    fn spread_to_strings(&self, _lookup: &CategoryLookup) -> Vec<String> {
        vec![
            self.id.to_string(),
            fmt_date(self.date),
            self.code.clone(),
            fmt_cents(self.unitprice),
            format!("{:.1}", self.qty.round_dp(1)),
            format!("${:.2}", self.value().round_dp(2)),
        ]
    }
}

impl DataRow for CategoryYear {
    fn spread_to_strings(&self, lookup: &CategoryLookup) -> Vec<String> {
        let mut res = Vec::with_capacity(13);
        res.push(lookup.name(self.cat_id).to_string());
        res.extend(self.month_sums.iter().map(|&v| fmt_cents_whole(v)));
        res
    }
}
