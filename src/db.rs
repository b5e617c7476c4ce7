// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Context;
use directories::ProjectDirs;
use rusqlite::types::Value;
use rusqlite::{Connection, params, params_from_iter};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::filter::FilterOpts;
use crate::mapper::{FromRow, collect_rows};
use crate::models::{Category, Investment, Record};

const APP: (&str, &str, &str) = ("com.alphavelocity", "Tally", "tally");

pub fn db_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("tally.sqlite"))
}

/// Open the ledger at `path`, or at the platform default when `None`.
pub fn open_or_init(path: Option<&Path>) -> anyhow::Result<Connection> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => db_path()?,
    };
    let conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    tracing::debug!(path = %path.display(), "ledger opened");
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS categories(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        description TEXT NOT NULL DEFAULT '',
        is_income INTEGER NOT NULL DEFAULT 0
    );

    -- no foreign key on category_id: unknown ids render as a blank name
    CREATE TABLE IF NOT EXISTS records(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        amount INTEGER NOT NULL,
        category_id INTEGER NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_records_date ON records(date);

    CREATE TABLE IF NOT EXISTS investments(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        code TEXT NOT NULL,
        unitprice INTEGER NOT NULL,
        quantity TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_investments_date ON investments(date);
    "#,
    )?;
    Ok(())
}

fn date_and_cost_clause(opts: &FilterOpts, cost_col: &str, sql: &mut String, params: &mut Vec<Value>) {
    sql.push_str(" AND date >= ? AND date <= ?");
    params.push(Value::Text(opts.start_date().to_string()));
    params.push(Value::Text(opts.end_date().to_string()));
    sql.push_str(&format!(" AND {cost_col} >= ? AND {cost_col} <= ?"));
    params.push(Value::Integer(opts.min_cents()));
    params.push(Value::Integer(opts.max_cents()));
}

pub fn query_records(conn: &Connection, opts: &FilterOpts) -> Result<Vec<Record>> {
    let mut sql = format!("SELECT {} FROM records WHERE 1=1", Record::COLUMNS);
    let mut params_vec: Vec<Value> = Vec::new();
    date_and_cost_clause(opts, "amount", &mut sql, &mut params_vec);
    if !opts.cat_ids().is_empty() {
        let marks = vec!["?"; opts.cat_ids().len()].join(",");
        sql.push_str(&format!(" AND category_id IN ({marks})"));
        params_vec.extend(opts.cat_ids().iter().map(|&id| Value::Integer(id)));
    }
    sql.push_str(" ORDER BY date DESC, id DESC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query(params_from_iter(params_vec.iter()))?;
    let records = collect_rows::<Record>(rows)?;
    tracing::debug!(count = records.len(), "queried records");
    Ok(records)
}

pub fn query_investments(conn: &Connection, opts: &FilterOpts) -> Result<Vec<Investment>> {
    let mut sql = format!("SELECT {} FROM investments WHERE 1=1", Investment::COLUMNS);
    let mut params_vec: Vec<Value> = Vec::new();
    date_and_cost_clause(opts, "unitprice", &mut sql, &mut params_vec);
    if !opts.code().is_empty() {
        sql.push_str(" AND code = ?");
        params_vec.push(Value::Text(opts.code().to_string()));
    }
    sql.push_str(" ORDER BY date DESC, id DESC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query(params_from_iter(params_vec.iter()))?;
    let investments = collect_rows::<Investment>(rows)?;
    tracing::debug!(count = investments.len(), "queried investments");
    Ok(investments)
}

pub fn query_categories(conn: &Connection) -> Result<Vec<Category>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM categories ORDER BY id",
        Category::COLUMNS
    ))?;
    let rows = stmt.query([])?;
    collect_rows::<Category>(rows)
}

pub fn get_record(conn: &Connection, id: i64) -> Result<Option<Record>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM records WHERE id=?1",
        Record::COLUMNS
    ))?;
    let rows = stmt.query(params![id])?;
    Ok(collect_rows::<Record>(rows)?.into_iter().next())
}

pub fn insert_record(conn: &Connection, rec: &Record) -> Result<i64> {
    conn.execute(
        "INSERT INTO records(date, description, amount, category_id) VALUES (?1, ?2, ?3, ?4)",
        params![rec.date.to_string(), rec.desc, rec.amt, rec.cat_id],
    )?;
    let id = conn.last_insert_rowid();
    tracing::info!(id, amount = rec.amt, "record added");
    Ok(id)
}

/// Returns false when no record has `rec.id`.
pub fn update_record(conn: &Connection, rec: &Record) -> Result<bool> {
    let n = conn.execute(
        "UPDATE records SET date=?1, description=?2, amount=?3, category_id=?4 WHERE id=?5",
        params![rec.date.to_string(), rec.desc, rec.amt, rec.cat_id, rec.id],
    )?;
    tracing::info!(id = rec.id, updated = n, "record updated");
    Ok(n > 0)
}

pub fn delete_record(conn: &Connection, id: i64) -> Result<bool> {
    let n = conn.execute("DELETE FROM records WHERE id=?1", params![id])?;
    tracing::info!(id, deleted = n, "record removed");
    Ok(n > 0)
}

pub fn insert_category(conn: &Connection, cat: &Category) -> Result<i64> {
    conn.execute(
        "INSERT INTO categories(name, description, is_income) VALUES (?1, ?2, ?3)",
        params![cat.name, cat.desc, cat.is_income],
    )?;
    let id = conn.last_insert_rowid();
    tracing::info!(id, name = %cat.name, "category added");
    Ok(id)
}

pub fn delete_category(conn: &Connection, name: &str) -> Result<bool> {
    let n = conn.execute("DELETE FROM categories WHERE name=?1", params![name])?;
    tracing::info!(name, deleted = n, "category removed");
    Ok(n > 0)
}

pub fn insert_investment(conn: &Connection, inv: &Investment) -> Result<i64> {
    conn.execute(
        "INSERT INTO investments(date, code, unitprice, quantity) VALUES (?1, ?2, ?3, ?4)",
        params![
            inv.date.to_string(),
            inv.code,
            inv.unitprice,
            inv.qty.to_string()
        ],
    )?;
    let id = conn.last_insert_rowid();
    tracing::info!(id, code = %inv.code, "investment added");
    Ok(id)
}

pub fn delete_investment(conn: &Connection, id: i64) -> Result<bool> {
    let n = conn.execute("DELETE FROM investments WHERE id=?1", params![id])?;
    tracing::info!(id, deleted = n, "investment removed");
    Ok(n > 0)
}
