// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use rust_decimal::Decimal;
use tally::db;
use tally::display::DataRow;
use tally::error::LedgerError;
use tally::lookup::CategoryLookup;
use tally::mapper::{FromRow, collect_rows, map_rows};
use tally::models::{Category, Investment, Record};

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

#[test]
fn empty_row_source_gives_empty_list() {
    let conn = setup();
    let mut stmt = conn
        .prepare(&format!("SELECT {} FROM records", Record::COLUMNS))
        .unwrap();
    let rows = stmt.query([]).unwrap();
    let out = map_rows::<Record>(rows).unwrap();
    assert!(out.is_empty());
}

#[test]
fn decodes_each_entity_layout() {
    let conn = setup();
    conn.execute_batch(
        r#"
        INSERT INTO categories(name, description, is_income) VALUES ('Salary', 'Monthly pay', 1);
        INSERT INTO records(date, description, amount, category_id) VALUES ('2024-03-10', 'March pay', 420000, 1);
        INSERT INTO investments(date, code, unitprice, quantity) VALUES ('2024-04-01', 'VAS', 9150, '12.5');
        "#,
    )
    .unwrap();

    let cats = db::query_categories(&conn).unwrap();
    assert_eq!(
        cats,
        vec![Category {
            id: 1,
            name: "Salary".into(),
            is_income: true,
            desc: "Monthly pay".into(),
        }]
    );

    let mut stmt = conn
        .prepare(&format!("SELECT {} FROM records", Record::COLUMNS))
        .unwrap();
    let recs = collect_rows::<Record>(stmt.query([]).unwrap()).unwrap();
    assert_eq!(recs[0].desc, "March pay");
    assert_eq!(recs[0].amt, 420_000);
    assert_eq!(recs[0].cat_id, 1);

    let mut stmt = conn
        .prepare(&format!("SELECT {} FROM investments", Investment::COLUMNS))
        .unwrap();
    let invs = collect_rows::<Investment>(stmt.query([]).unwrap()).unwrap();
    assert_eq!(invs[0].code, "VAS");
    assert_eq!(invs[0].qty, Decimal::new(125, 1));
}

#[test]
fn bad_row_aborts_whole_mapping() {
    let conn = setup();
    conn.execute_batch(
        r#"
        INSERT INTO records(date, description, amount, category_id) VALUES ('2024-01-01', 'ok', 100, 1);
        INSERT INTO records(date, description, amount, category_id) VALUES ('not-a-date', 'bad', 100, 1);
        INSERT INTO records(date, description, amount, category_id) VALUES ('2024-01-03', 'ok', 100, 1);
        "#,
    )
    .unwrap();
    let mut stmt = conn
        .prepare(&format!("SELECT {} FROM records ORDER BY id", Record::COLUMNS))
        .unwrap();
    let err = map_rows::<Record>(stmt.query([]).unwrap()).err().unwrap();
    match err {
        LedgerError::RowDecode { row, .. } => assert_eq!(row, 1),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn cursor_failure_aborts_whole_mapping() {
    let conn = setup();
    conn.execute(
        "INSERT INTO records(date, description, amount, category_id) VALUES ('2024-01-01', 'ok', 100, 1)",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO records(date, description, amount, category_id) VALUES ('2024-01-02', 'min', ?1, 1)",
        [i64::MIN],
    )
    .unwrap();
    // abs() of the smallest integer raises an overflow while stepping to row 2
    let mut stmt = conn
        .prepare("SELECT id, date, description, abs(amount), category_id FROM records ORDER BY id")
        .unwrap();
    let result = map_rows::<Record>(stmt.query([]).unwrap());
    match result {
        Err(LedgerError::Cursor(_)) => {}
        Err(other) => panic!("unexpected error: {other}"),
        Ok(rows) => panic!("expected failure, got {} rows", rows.len()),
    }
}

#[test]
fn unparsable_quantity_is_a_decode_failure() {
    let conn = setup();
    conn.execute(
        "INSERT INTO investments(date, code, unitprice, quantity) VALUES ('2024-04-01', 'VAS', 9150, 'lots')",
        [],
    )
    .unwrap();
    let mut stmt = conn
        .prepare(&format!("SELECT {} FROM investments", Investment::COLUMNS))
        .unwrap();
    let err = collect_rows::<Investment>(stmt.query([]).unwrap()).unwrap_err();
    assert!(matches!(err, LedgerError::RowDecode { row: 0, .. }));
    assert!(err.to_string().contains("row 0"));
}

#[test]
fn wrong_shape_is_a_decode_failure() {
    let conn = setup();
    conn.execute(
        "INSERT INTO categories(name, description, is_income) VALUES ('Food', '', 0)",
        [],
    )
    .unwrap();
    // Category layout fed to the record mapper: column 1 is a name, not a date
    let mut stmt = conn
        .prepare(&format!("SELECT {} FROM categories", Category::COLUMNS))
        .unwrap();
    let err = collect_rows::<Record>(stmt.query([]).unwrap()).unwrap_err();
    assert!(matches!(err, LedgerError::RowDecode { .. }));
}

#[test]
fn mapped_rows_render_with_lookup() {
    let conn = setup();
    conn.execute_batch(
        r#"
        INSERT INTO categories(name, description, is_income) VALUES ('Food', '', 0);
        INSERT INTO records(date, description, amount, category_id) VALUES ('2024-02-02', 'Bread', -350, 1);
        "#,
    )
    .unwrap();
    let lookup = CategoryLookup::load(&conn).unwrap();
    let mut stmt = conn
        .prepare(&format!("SELECT {} FROM records", Record::COLUMNS))
        .unwrap();
    let rows = map_rows::<Record>(stmt.query([]).unwrap()).unwrap();
    assert_eq!(
        rows[0].spread_to_strings(&lookup),
        vec!["1", "2024-02-02", "Food", "Bread", "$-3.50"]
    );
}
