// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use tally::db;
use tally::filter::FilterOpts;
use tally::models::{Investment, Record};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn rec(id: i64, d: NaiveDate, cat_id: i64, amt: i64) -> Record {
    Record {
        id,
        date: d,
        cat_id,
        desc: format!("r{}", id),
        amt,
    }
}

fn setup() -> (Connection, Vec<Record>) {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    let records = vec![
        rec(1, date(2023, 12, 31), 1, -2_000),
        rec(2, date(2024, 1, 1), 1, 500),
        rec(3, date(2024, 6, 15), 2, -9_999_999),
        rec(4, date(2024, 6, 15), 3, 150_000),
        rec(5, date(2024, 12, 31), 2, -1),
        rec(6, date(2025, 1, 1), 1, 300),
    ];
    for r in &records {
        db::insert_record(&conn, r).unwrap();
    }
    (conn, records)
}

fn ids(records: &[Record]) -> Vec<i64> {
    let mut v: Vec<i64> = records.iter().map(|r| r.id).collect();
    v.sort();
    v
}

#[test]
fn defaults_match_everything() {
    let opts = FilterOpts::new();
    assert_eq!(opts.min_cost(), Decimal::from(-100_000));
    assert_eq!(opts.max_cost(), Decimal::from(100_000));
    assert_eq!(opts.start_date(), date(2000, 1, 1));
    assert_eq!(opts.end_date(), date(3000, 1, 1));
    assert!(opts.cat_ids().is_empty());
    assert_eq!(opts.code(), "");

    for cat_id in [0, 1, 42] {
        for amt in [-10_000_000, -1, 0, 1, 10_000_000] {
            assert!(opts.matches_record(&rec(1, date(2024, 6, 15), cat_id, amt)));
        }
    }
}

#[test]
fn modifiers_leave_base_untouched() {
    let base = FilterOpts::new();
    let narrowed = base
        .with_start_date(date(2024, 1, 1))
        .with_cat_ids(vec![2, 3])
        .with_code("VAS");
    assert_eq!(base, FilterOpts::new());
    assert_eq!(narrowed.start_date(), date(2024, 1, 1));
    assert_eq!(narrowed.end_date(), base.end_date());
    assert_eq!(narrowed.cat_ids(), &[2i64, 3]);
    assert_eq!(narrowed.code(), "VAS");
}

#[test]
fn inverted_cost_bounds_are_valid_but_match_nothing() {
    let (conn, records) = setup();
    let opts = FilterOpts::new()
        .with_min_cost(Decimal::from(5))
        .with_max_cost(Decimal::from(3));
    assert_eq!(opts.min_cost(), Decimal::from(5));
    assert_eq!(opts.max_cost(), Decimal::from(3));
    assert!(records.iter().all(|r| !opts.matches_record(r)));
    assert!(db::query_records(&conn, &opts).unwrap().is_empty());
}

#[test]
fn cost_bounds_are_inclusive_in_major_units() {
    let opts = FilterOpts::new()
        .with_min_cost(Decimal::new(500, 2))
        .with_max_cost(Decimal::new(1500, 2));
    let d = date(2024, 3, 3);
    assert!(opts.matches_record(&rec(1, d, 1, 500)));
    assert!(opts.matches_record(&rec(1, d, 1, 1_500)));
    assert!(!opts.matches_record(&rec(1, d, 1, 499)));
    assert!(!opts.matches_record(&rec(1, d, 1, 1_501)));
    assert_eq!(opts.min_cents(), 500);
    assert_eq!(opts.max_cents(), 1_500);
}

#[test]
fn fractional_cent_bounds_round_inward() {
    let opts = FilterOpts::new()
        .with_min_cost(Decimal::new(1001, 3))
        .with_max_cost(Decimal::new(2009, 3));
    assert_eq!(opts.min_cents(), 101);
    assert_eq!(opts.max_cents(), 200);
}

#[test]
fn query_agrees_with_in_memory_predicate() {
    let (conn, records) = setup();
    let cases = vec![
        FilterOpts::new(),
        FilterOpts::new().for_year(2024),
        FilterOpts::new().with_cat_ids(vec![1]),
        FilterOpts::new().with_cat_ids(vec![2, 3]).for_year(2024),
        FilterOpts::new().with_min_cost(Decimal::ZERO),
        FilterOpts::new().with_max_cost(Decimal::new(-1, 2)),
        FilterOpts::new()
            .with_start_date(date(2024, 6, 15))
            .with_end_date(date(2024, 6, 15)),
        FilterOpts::new().with_cat_ids(vec![404]),
    ];
    for opts in cases {
        let expected: Vec<Record> = records
            .iter()
            .filter(|r| opts.matches_record(r))
            .cloned()
            .collect();
        let got = db::query_records(&conn, &opts).unwrap();
        assert_eq!(ids(&got), ids(&expected), "filter {:?}", opts);
    }
}

#[test]
fn default_bounds_exclude_out_of_range_amounts() {
    let (conn, _) = setup();
    let got = db::query_records(&conn, &FilterOpts::new()).unwrap();
    // -99999.99 is inside the default range; everything is returned
    assert_eq!(ids(&got), vec![1, 2, 3, 4, 5, 6]);
    // newest first
    assert_eq!(got[0].id, 6);
}

#[test]
fn investments_filter_by_code_and_unit_price() {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    let lots = [
        ("VAS", 9_000, 10),
        ("VAS", 9_500, 5),
        ("IVV", 55_000, 2),
    ];
    for (i, (code, price, qty)) in lots.iter().enumerate() {
        db::insert_investment(
            &conn,
            &Investment {
                id: 0,
                date: date(2024, 1 + i as u32, 1),
                code: code.to_string(),
                unitprice: *price,
                qty: Decimal::from(*qty),
            },
        )
        .unwrap();
    }

    let vas = db::query_investments(&conn, &FilterOpts::new().with_code("VAS")).unwrap();
    assert_eq!(vas.len(), 2);
    assert!(vas.iter().all(|i| i.code == "VAS"));

    let cheap = FilterOpts::new().with_max_cost(Decimal::from(92));
    let got = db::query_investments(&conn, &cheap).unwrap();
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].unitprice, 9_000);
    assert!(cheap.matches_investment(&got[0]));

    let none = db::query_investments(&conn, &FilterOpts::new().with_code("XYZ")).unwrap();
    assert!(none.is_empty());
}

#[test]
fn extreme_cost_bounds_saturate_instead_of_overflowing() {
    let d = date(2024, 6, 15);
    let huge_min = FilterOpts::new().with_min_cost(Decimal::MAX);
    assert_eq!(huge_min.min_cents(), i64::MAX);
    assert!(!huge_min.matches_record(&rec(1, d, 1, 500)));

    let huge_max = FilterOpts::new().with_max_cost(Decimal::MAX);
    assert_eq!(huge_max.max_cents(), i64::MAX);
    assert!(huge_max.matches_record(&rec(1, d, 1, 500)));

    let tiny_min = FilterOpts::new().with_min_cost(Decimal::MIN);
    assert_eq!(tiny_min.min_cents(), i64::MIN);
    assert!(tiny_min.matches_record(&rec(1, d, 1, -500)));

    // fits in Decimal after scaling but not in i64
    let big_max = FilterOpts::new().with_max_cost(Decimal::from(i64::MAX));
    assert_eq!(big_max.max_cents(), i64::MAX);
}

#[test]
fn extreme_cost_bounds_query_without_failing() {
    let (conn, _) = setup();
    let none = FilterOpts::new().with_min_cost(Decimal::MAX);
    assert!(db::query_records(&conn, &none).unwrap().is_empty());
    let all = FilterOpts::new()
        .with_min_cost(Decimal::MIN)
        .with_max_cost(Decimal::MAX);
    assert_eq!(ids(&db::query_records(&conn, &all).unwrap()), vec![1, 2, 3, 4, 5, 6]);
}
