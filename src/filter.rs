// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{Investment, Record};

pub const DEFAULT_MIN_COST: i64 = -100_000;
pub const DEFAULT_MAX_COST: i64 = 100_000;

/// Query-shaping options for records and investments.
///
/// All bounds are inclusive. Cost bounds are in major currency units. An
/// empty `cat_ids` or `code` places no restriction. The default value
/// matches everything.
///
/// Every `with_*` method returns a new value and leaves the receiver as it
/// was, so one base filter can seed several derived ones. Bounds are never
/// validated: a minimum above its maximum is a valid value that simply
/// matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOpts {
    min_cost: Decimal,
    max_cost: Decimal,
    start_date: NaiveDate,
    end_date: NaiveDate,
    cat_ids: Vec<i64>,
    code: String,
}

impl Default for FilterOpts {
    fn default() -> Self {
        Self {
            min_cost: Decimal::from(DEFAULT_MIN_COST),
            max_cost: Decimal::from(DEFAULT_MAX_COST),
            start_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN),
            end_date: NaiveDate::from_ymd_opt(3000, 1, 1).unwrap_or(NaiveDate::MAX),
            cat_ids: Vec::new(),
            code: String::new(),
        }
    }
}

impl FilterOpts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_cost(&self, val: Decimal) -> Self {
        Self {
            min_cost: val,
            ..self.clone()
        }
    }

    pub fn with_max_cost(&self, val: Decimal) -> Self {
        Self {
            max_cost: val,
            ..self.clone()
        }
    }

    pub fn with_start_date(&self, val: NaiveDate) -> Self {
        Self {
            start_date: val,
            ..self.clone()
        }
    }

    pub fn with_end_date(&self, val: NaiveDate) -> Self {
        Self {
            end_date: val,
            ..self.clone()
        }
    }

    pub fn with_cat_ids(&self, val: Vec<i64>) -> Self {
        Self {
            cat_ids: val,
            ..self.clone()
        }
    }

    pub fn with_code(&self, val: impl Into<String>) -> Self {
        Self {
            code: val.into(),
            ..self.clone()
        }
    }

    /// Narrow the date bounds to one calendar year.
    pub fn for_year(&self, year: i32) -> Self {
        let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(self.start_date);
        let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(self.end_date);
        self.with_start_date(start).with_end_date(end)
    }

    pub fn min_cost(&self) -> Decimal {
        self.min_cost
    }

    pub fn max_cost(&self) -> Decimal {
        self.max_cost
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn cat_ids(&self) -> &[i64] {
        &self.cat_ids
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Smallest cent amount inside the cost range.
    pub fn min_cents(&self) -> i64 {
        saturating_cents(self.min_cost, Decimal::ceil)
    }

    /// Largest cent amount inside the cost range.
    pub fn max_cents(&self) -> i64 {
        saturating_cents(self.max_cost, Decimal::floor)
    }

    fn date_in_range(&self, d: NaiveDate) -> bool {
        self.start_date <= d && d <= self.end_date
    }

    fn cents_in_range(&self, cents: i64) -> bool {
        self.min_cents() <= cents && cents <= self.max_cents()
    }

    pub fn matches_record(&self, rec: &Record) -> bool {
        self.date_in_range(rec.date)
            && self.cents_in_range(rec.amt)
            && (self.cat_ids.is_empty() || self.cat_ids.contains(&rec.cat_id))
    }

    /// Investments are bounded on their unit price; `cat_ids` does not apply.
    pub fn matches_investment(&self, inv: &Investment) -> bool {
        self.date_in_range(inv.date)
            && self.cents_in_range(inv.unitprice)
            && (self.code.is_empty() || self.code == inv.code)
    }
}

/// Major units to whole cents, clamped to the `i64` range on overflow.
fn saturating_cents(major: Decimal, round: fn(&Decimal) -> Decimal) -> i64 {
    match major
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|c| round(&c).to_i64())
    {
        Some(cents) => cents,
        None if major.is_sign_negative() => i64::MIN,
        None => i64::MAX,
    }
}
