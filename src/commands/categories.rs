// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db;
use crate::lookup::CategoryLookup;
use crate::models::Category;
use crate::utils::{maybe_print_json, render_rows};
use anyhow::{Result, bail};
use rusqlite::Connection;

pub fn handle(conn: &Connection, lookup: &CategoryLookup, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim().to_string();
            if name.is_empty() {
                bail!("Category name must not be empty");
            }
            let cat = Category {
                id: 0,
                name,
                is_income: sub.get_flag("income"),
                desc: sub.get_one::<String>("desc").cloned().unwrap_or_default(),
            };
            db::insert_category(conn, &cat)?;
            println!("Added category '{}'", cat.name);
        }
        Some(("list", sub)) => {
            let cats = lookup.categories();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &cats)? {
                println!("{}", render_rows(&Category::HEADERS, cats, lookup));
            }
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim();
            if !db::delete_category(conn, name)? {
                bail!("Category '{}' not found", name);
            }
            println!("Removed category '{}'", name);
        }
        _ => {}
    }
    Ok(())
}
