// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lb_core::Database;

use super::open_db;
use crate::cli::OutputFormat;
use crate::display::format_lead_details;
use crate::error::{Error, Result};

pub fn run(ids: &[String], output: OutputFormat) -> Result<()> {
    let (db, _) = open_db()?;
    run_impl(&db, ids, output)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &Database, ids: &[String], output: OutputFormat) -> Result<()> {
    // Resolve all IDs first (fail fast if any is invalid)
    let resolved: Vec<String> = ids
        .iter()
        .map(|id| db.resolve_id(id).map_err(Error::from))
        .collect::<Result<Vec<_>>>()?;

    match output {
        OutputFormat::Json => {
            for id in &resolved {
                let lead = db.get_lead(id)?;
                // Use to_string (not to_string_pretty) for JSONL format
                println!("{}", serde_json::to_string(&lead)?);
            }
        }
        _ => {
            for (i, id) in resolved.iter().enumerate() {
                if i > 0 {
                    println!("---");
                }
                let lead = db.get_lead(id)?;
                print!("{}", format_lead_details(&lead));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
