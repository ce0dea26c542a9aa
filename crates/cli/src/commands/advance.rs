// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;
use lb_core::Database;

use super::open_db;
use crate::error::Result;

pub fn run(ids: &[String]) -> Result<()> {
    let (mut db, _) = open_db()?;
    run_impl(&mut db, ids)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &mut Database, ids: &[String]) -> Result<()> {
    for id in ids {
        advance_single(db, id)?;
    }
    Ok(())
}

fn advance_single(db: &mut Database, id: &str) -> Result<()> {
    let resolved = db.resolve_id(id)?;
    let mut lead = db.get_lead(&resolved)?;

    let previous = lead.stage;
    let next = lead.advance(Utc::now())?;

    // Persist first, report after: the stage change and its audit note
    // commit in one transaction before anything claims success.
    db.save_lead(&mut lead)?;

    println!("Advanced {}: {} -> {}", resolved, previous, next);
    Ok(())
}

#[cfg(test)]
#[path = "advance_tests.rs"]
mod tests;
