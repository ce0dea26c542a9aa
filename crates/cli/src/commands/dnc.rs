// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;
use lb_core::Database;

use super::open_db;
use crate::error::Result;

pub fn run(id: &str, do_not_contact: bool) -> Result<()> {
    let (mut db, _) = open_db()?;
    run_impl(&mut db, id, do_not_contact)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &mut Database, id: &str, do_not_contact: bool) -> Result<()> {
    let resolved = db.resolve_id(id)?;
    let mut lead = db.get_lead(&resolved)?;

    lead.set_do_not_contact(do_not_contact, Utc::now());
    db.save_lead(&mut lead)?;

    if do_not_contact {
        println!("Marked {} as do-not-contact", resolved);
    } else {
        println!("Removed do-not-contact flag from {}", resolved);
    }
    Ok(())
}

#[cfg(test)]
#[path = "dnc_tests.rs"]
mod tests;
