// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod db;
pub mod display;
pub mod error;
pub mod filter;
pub mod lookup;
pub mod mapper;
pub mod models;
pub mod utils;
