// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;
use lb_core::{Database, Note};

use super::open_db;
use crate::cli::NoteKind;
use crate::error::{Error, Result};

pub fn run(id: &str, text: &str, kind: NoteKind) -> Result<()> {
    let (mut db, _) = open_db()?;
    run_impl(&mut db, id, text, kind)
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &mut Database, id: &str, text: &str, kind: NoteKind) -> Result<()> {
    let resolved = db.resolve_id(id)?;
    let mut lead = db.get_lead(&resolved)?;

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput(
            "note text cannot be empty".to_string(),
        ));
    }

    let note = Note::new(resolved.clone(), kind.into(), trimmed.to_string());
    let note_type = note.note_type;
    lead.add_note(note, Utc::now().date_naive());
    db.save_lead(&mut lead)?;

    println!("Added {} note to {}", note_type, resolved);
    Ok(())
}

#[cfg(test)]
#[path = "note_tests.rs"]
mod tests;
