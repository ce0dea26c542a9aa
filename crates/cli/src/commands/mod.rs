// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod advance;
pub mod completions;
pub mod dnc;
pub mod edit;
pub mod flag;
pub mod init;
pub mod list;
pub mod new;
pub mod note;
pub mod preview;
pub mod send;
pub mod show;

#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use crate::config::{find_work_dir, get_db_path, Config};
use crate::error::Result;
use lb_core::Database;

/// Helper to open the database from the current context.
pub fn open_db() -> Result<(Database, Config)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let db_path = get_db_path(&work_dir, &config);
    let db = Database::open(&db_path)?;
    Ok((db, config))
}
