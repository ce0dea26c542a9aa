// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::str::FromStr;

use lb_core::{Database, Stage};

use super::open_db;
use crate::cli::OutputFormat;
use crate::display::format_lead_line;
use crate::error::Result;

pub fn run(
    stage: Option<&str>,
    dnc: bool,
    no_dnc: bool,
    flagged: bool,
    output: OutputFormat,
) -> Result<()> {
    let (db, _) = open_db()?;
    run_impl(&db, stage, dnc, no_dnc, flagged, output)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(
    db: &Database,
    stage: Option<&str>,
    dnc: bool,
    no_dnc: bool,
    flagged: bool,
    output: OutputFormat,
) -> Result<()> {
    let stage = stage.map(Stage::from_str).transpose()?;
    let dnc_filter = match (dnc, no_dnc) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };

    let leads = db.list_leads(stage, dnc_filter, flagged)?;

    match output {
        OutputFormat::Text => {
            if leads.is_empty() {
                println!("No leads found");
            }
            for lead in &leads {
                println!("{}", format_lead_line(lead));
            }
        }
        OutputFormat::Json => {
            // JSONL: one lead per line
            for lead in &leads {
                println!("{}", serde_json::to_string(lead)?);
            }
        }
        OutputFormat::Id => {
            for lead in &leads {
                println!("{}", lead.id);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
