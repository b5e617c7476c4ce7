// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tally::{cli, commands, db, lookup::CategoryLookup};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let db_file = matches.get_one::<PathBuf>("db").map(PathBuf::as_path);
    let conn = db::open_or_init(db_file)?;
    // Categories are read once per run and shared read-only by every view.
    let lookup = CategoryLookup::load(&conn)?;

    match matches.subcommand() {
        Some(("init", _)) => match db_file {
            Some(p) => println!("Database initialized at {}", p.display()),
            None => println!("Database initialized at {}", db::db_path()?.display()),
        },
        Some(("record", sub)) => commands::records::handle(&conn, &lookup, sub)?,
        Some(("category", sub)) => commands::categories::handle(&conn, &lookup, sub)?,
        Some(("investment", sub)) => commands::investments::handle(&conn, &lookup, sub)?,
        Some(("summary", sub)) => commands::summary::handle(&conn, &lookup, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
