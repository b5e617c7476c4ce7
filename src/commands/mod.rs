// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod categories;
pub mod investments;
pub mod records;
pub mod summary;

use crate::filter::FilterOpts;
use crate::utils::{parse_date, parse_decimal};
use anyhow::Result;

/// Apply the shared `--from/--to/--min/--max` options onto `opts`.
pub(crate) fn range_opts(mut opts: FilterOpts, sub: &clap::ArgMatches) -> Result<FilterOpts> {
    if let Some(from) = sub.get_one::<String>("from") {
        opts = opts.with_start_date(parse_date(from)?);
    }
    if let Some(to) = sub.get_one::<String>("to") {
        opts = opts.with_end_date(parse_date(to)?);
    }
    if let Some(min) = sub.get_one::<String>("min") {
        opts = opts.with_min_cost(parse_decimal(min)?);
    }
    if let Some(max) = sub.get_one::<String>("max") {
        opts = opts.with_max_cost(parse_decimal(max)?);
    }
    Ok(opts)
}
