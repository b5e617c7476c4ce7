// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use rusqlite::Connection;

use crate::error::Result;
use crate::models::Category;

/// Read-only category reference table, loaded once per session and passed
/// to whatever needs to resolve category ids.
#[derive(Debug, Clone, Default)]
pub struct CategoryLookup {
    categories: Vec<Category>,
    index_by_id: HashMap<i64, usize>,
}

impl CategoryLookup {
    pub fn new(categories: Vec<Category>) -> Self {
        let index_by_id = categories
            .iter()
            .enumerate()
            .map(|(idx, c)| (c.id, idx))
            .collect();
        Self {
            categories,
            index_by_id,
        }
    }

    pub fn load(conn: &Connection) -> Result<Self> {
        let categories = crate::db::query_categories(conn)?;
        tracing::debug!(count = categories.len(), "loaded category table");
        Ok(Self::new(categories))
    }

    /// Name for `id`, or an empty string when no such category exists.
    pub fn name(&self, id: i64) -> &str {
        self.get(id).map(|c| c.name.as_str()).unwrap_or("")
    }

    pub fn get(&self, id: i64) -> Option<&Category> {
        self.index_by_id.get(&id).map(|&idx| &self.categories[idx])
    }

    pub fn id_for_name(&self, name: &str) -> Option<i64> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.id)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
