// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lb_core::Database;

use super::open_db;
use crate::error::Result;

pub fn run(id: &str, flagged: bool) -> Result<()> {
    let (mut db, _) = open_db()?;
    run_impl(&mut db, id, flagged)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &mut Database, id: &str, flagged: bool) -> Result<()> {
    let resolved = db.resolve_id(id)?;
    let mut lead = db.get_lead(&resolved)?;

    lead.set_flagged(flagged);
    db.save_lead(&mut lead)?;

    if flagged {
        // The next stage name is informational feedback only; nothing
        // about it is persisted on the lead.
        match lead.next_stage() {
            Some(next) => println!("Flagged {} (next stage: {})", resolved, next.label()),
            None => println!("Flagged {} (no forward stage remains)", resolved),
        }
    } else {
        println!("Cleared flag on {}", resolved);
    }
    Ok(())
}

#[cfg(test)]
#[path = "flag_tests.rs"]
mod tests;
