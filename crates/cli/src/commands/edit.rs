// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::str::FromStr;

use chrono::Utc;
use lb_core::{Database, LeadUpdate, Stage};

use super::open_db;
use crate::error::{Error, Result};

pub fn run(id: &str, attr: &str, value: &str) -> Result<()> {
    let (mut db, _) = open_db()?;
    run_impl(&mut db, id, attr, value)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &mut Database, id: &str, attr: &str, value: &str) -> Result<()> {
    let resolved = db.resolve_id(id)?;
    let mut lead = db.get_lead(&resolved)?;

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput(format!(
            "value for '{}' cannot be empty",
            attr
        )));
    }

    let mut update = LeadUpdate::default();
    match attr.to_lowercase().as_str() {
        "name" => update.name = Some(trimmed.to_string()),
        "email" => update.email = Some(trimmed.to_string()),
        "phone" => update.phone = Some(trimmed.to_string()),
        "source" => update.source = Some(trimmed.to_string()),
        // The escape hatch: any stage is accepted here, including lost
        // and backward moves. Unknown values are rejected at the parse.
        "stage" => update.stage = Some(Stage::from_str(trimmed)?),
        _ => {
            return Err(Error::UnknownAttribute {
                attr: attr.to_string(),
            });
        }
    }

    let stage_change = lead.apply(update, Utc::now());
    db.save_lead(&mut lead)?;

    match stage_change {
        Some((previous, new)) => {
            println!("Updated stage of {}: {} -> {}", resolved, previous, new)
        }
        None => println!("Updated {} of {}", attr.to_lowercase(), resolved),
    }
    Ok(())
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
