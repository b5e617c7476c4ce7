// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single ledger entry. `amt` is in cents; its sign is not tied to the
/// category's income flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub date: NaiveDate,
    pub cat_id: i64,
    pub desc: String,
    pub amt: i64,
}

impl Record {
    pub const HEADERS: [&'static str; 5] = ["Id", "Date", "Category", "Description", "Amount"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub is_income: bool,
    pub desc: String,
}

impl Category {
    pub const HEADERS: [&'static str; 4] = ["Id", "Name", "Type", "Description"];
}

/// An investment lot: `qty` units of `code` bought at `unitprice` cents each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Investment {
    pub id: i64,
    pub date: NaiveDate,
    pub code: String,
    pub unitprice: i64,
    pub qty: Decimal,
}

impl Investment {
    pub const HEADERS: [&'static str; 6] = ["Id", "Date", "Code", "Unit Price", "Qty", "Value"];

    /// Position value in major units, unrounded.
    pub fn value(&self) -> Decimal {
        Decimal::new(self.unitprice, 2) * self.qty
    }
}

/// Monthly totals (cents) of one category over a calendar year.
/// Index 0 is January.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryYear {
    pub cat_id: i64,
    pub month_sums: [i64; 12],
}

impl CategoryYear {
    pub const HEADERS: [&'static str; 13] = [
        "Category", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
        "Dec",
    ];

    pub fn new(cat_id: i64) -> Self {
        Self {
            cat_id,
            month_sums: [0; 12],
        }
    }

    pub fn total(&self) -> i64 {
        self.month_sums.iter().sum()
    }
}
