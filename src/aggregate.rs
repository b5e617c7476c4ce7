// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Datelike;

use crate::lookup::CategoryLookup;
use crate::models::{Category, CategoryYear, Record};

/// Per-month totals of `cat_id` in `year`. Months without records stay at zero.
pub fn category_year(cat_id: i64, year: i32, records: &[Record]) -> CategoryYear {
    let mut cy = CategoryYear::new(cat_id);
    for rec in records
        .iter()
        .filter(|r| r.cat_id == cat_id && r.date.year() == year)
    {
        cy.month_sums[rec.date.month0() as usize] += rec.amt;
    }
    cy
}

/// One row per known category, in lookup order.
pub fn year_summary(lookup: &CategoryLookup, year: i32, records: &[Record]) -> Vec<CategoryYear> {
    lookup
        .categories()
        .iter()
        .map(|c| category_year(c.id, year, records))
        .collect()
}

/// Total of each known category for a single month (1-based).
pub fn month_totals<'a>(
    lookup: &'a CategoryLookup,
    year: i32,
    month: u32,
    records: &[Record],
) -> Vec<(&'a Category, i64)> {
    let idx = match month {
        1..=12 => (month - 1) as usize,
        _ => return Vec::new(),
    };
    year_summary(lookup, year, records)
        .into_iter()
        .zip(lookup.categories())
        .map(|(cy, c)| (c, cy.month_sums[idx]))
        .collect()
}
