// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors raised by the ledger core and its query layer.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A row did not match the column shape or types of its entity.
    #[error("Failed to decode row {row}: {source}")]
    RowDecode {
        row: usize,
        #[source]
        source: rusqlite::Error,
    },

    /// The row source failed while being iterated.
    #[error("Row source failed: {0}")]
    Cursor(#[source] rusqlite::Error),

    #[error("Database operation failed: {0}")]
    Database(#[from] rusqlite::Error),
}
