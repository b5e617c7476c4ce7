// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Row-to-entity mapping for query results.
//!
//! Mapping is all-or-nothing: the first bad row or cursor failure aborts the
//! whole conversion and nothing decoded so far is returned.

use rusqlite::types::Type;
use rusqlite::{Row, Rows};
use rust_decimal::Decimal;

use crate::display::DataRow;
use crate::error::{LedgerError, Result};
use crate::models::{Category, Investment, Record};

/// Decodes one entity from a row laid out in its storage column order.
pub trait FromRow: Sized {
    const COLUMNS: &'static str;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

impl FromRow for Record {
    const COLUMNS: &'static str = "id, date, description, amount, category_id";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Record {
            id: row.get(0)?,
            date: row.get(1)?,
            desc: row.get(2)?,
            amt: row.get(3)?,
            cat_id: row.get(4)?,
        })
    }
}

impl FromRow for Category {
    const COLUMNS: &'static str = "id, name, description, is_income";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Category {
            id: row.get(0)?,
            name: row.get(1)?,
            desc: row.get(2)?,
            is_income: row.get(3)?,
        })
    }
}

impl FromRow for Investment {
    const COLUMNS: &'static str = "id, date, code, unitprice, quantity";

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let qty: String = row.get(4)?;
        let qty = qty
            .trim()
            .parse::<Decimal>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;
        Ok(Investment {
            id: row.get(0)?,
            date: row.get(1)?,
            code: row.get(2)?,
            unitprice: row.get(3)?,
            qty,
        })
    }
}

/// Drain `rows` into typed entities.
pub fn collect_rows<T: FromRow>(mut rows: Rows<'_>) -> Result<Vec<T>> {
    let mut out = Vec::new();
    loop {
        let row = match rows.next().map_err(LedgerError::Cursor)? {
            Some(row) => row,
            None => break,
        };
        let item = T::from_row(row).map_err(|source| LedgerError::RowDecode {
            row: out.len(),
            source,
        })?;
        out.push(item);
    }
    Ok(out)
}

/// Drain `rows` into display rows, for renderers that handle mixed entity kinds.
pub fn map_rows<T>(rows: Rows<'_>) -> Result<Vec<Box<dyn DataRow>>>
where
    T: FromRow + DataRow + 'static,
{
    let items = collect_rows::<T>(rows)?;
    Ok(items
        .into_iter()
        .map(|item| Box::new(item) as Box<dyn DataRow>)
        .collect())
}
