// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;
use lb_core::{Database, Lead, Note, NoteType};

use super::open_db;
use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use crate::id::generate_unique_id;

/// Maximum number of retries for ID collision during lead creation.
const MAX_ID_COLLISION_RETRIES: u32 = 10;

pub fn run(
    name: &str,
    email: Option<String>,
    phone: Option<String>,
    source: Option<String>,
    note: Option<String>,
    output: OutputFormat,
) -> Result<()> {
    let (mut db, config) = open_db()?;
    let source = source.unwrap_or_else(|| config.default_source.clone());
    run_impl(&mut db, &config.prefix, name, email, phone, &source, note, output)
}

/// Internal implementation that accepts db/prefix for testing.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_impl(
    db: &mut Database,
    prefix: &str,
    name: &str,
    email: Option<String>,
    phone: Option<String>,
    source: &str,
    note: Option<String>,
    output: OutputFormat,
) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::InvalidInput("lead name cannot be empty".to_string()));
    }

    let lead = create_lead_with_retry(db, prefix, name, email, phone, source, note)?;

    match output {
        OutputFormat::Text => println!("Created lead {} ({})", lead.id, lead.name),
        OutputFormat::Id => println!("{}", lead.id),
        OutputFormat::Json => println!("{}", serde_json::to_string(&lead)?),
    }
    Ok(())
}

/// Create a lead with retry on ID collision.
///
/// Two processes can both see an ID as free and race to insert it; the
/// UNIQUE constraint catches the loser, which retries with a fresh
/// timestamp.
fn create_lead_with_retry(
    db: &mut Database,
    prefix: &str,
    name: &str,
    email: Option<String>,
    phone: Option<String>,
    source: &str,
    note: Option<String>,
) -> Result<Lead> {
    for _ in 0..MAX_ID_COLLISION_RETRIES {
        let created_at = Utc::now();
        let id = generate_unique_id(prefix, name, &created_at, |id| {
            db.lead_exists(id).unwrap_or(false)
        });

        let mut lead = Lead::new(
            id,
            name.to_string(),
            source.to_string(),
            created_at.date_naive(),
        );
        lead.email = email.clone();
        lead.phone = phone.clone();

        if let Some(text) = &note {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                let note = Note::new(lead.id.clone(), NoteType::Other, trimmed.to_string())
                    .with_timestamp(created_at);
                lead.add_note(note, created_at.date_naive());
            }
        }

        match db.create_lead(&mut lead) {
            Ok(()) => return Ok(lead),
            Err(lb_core::Error::Database(ref e)) if is_unique_constraint_error(e) => {
                // ID collision due to race condition, retry with new timestamp
                continue;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(Error::IdGenerationFailed)
}

/// Check if a rusqlite error is a UNIQUE constraint violation.
fn is_unique_constraint_error(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
