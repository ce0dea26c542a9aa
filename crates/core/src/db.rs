// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed database for lead storage.
//!
//! The [`Database`] struct provides all data access operations for leads
//! and their notes. [`Database::save_lead`] persists a lead and its
//! not-yet-stored notes inside a single transaction, so a stage change and
//! its audit note commit or fail together.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

use crate::error::{Error, Result};
use crate::lead::{Lead, Note, NoteType, Stage};

/// SQL schema for the lead tracker database.
///
/// Lead rows use the external persisted shape: the contact name is split
/// into first_name/last_name and the source column is named lead_source.
pub const SCHEMA: &str = r#"
-- Core lead table
CREATE TABLE IF NOT EXISTS leads (
    id TEXT PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL DEFAULT '',
    email TEXT,
    phone TEXT,
    stage TEXT NOT NULL DEFAULT 'new',
    lead_source TEXT NOT NULL DEFAULT '',
    date_added TEXT NOT NULL,
    last_contact_date TEXT,
    flagged INTEGER NOT NULL DEFAULT 0,
    do_not_contact INTEGER NOT NULL DEFAULT 0,
    ready_to_move INTEGER NOT NULL DEFAULT 0
);

-- Append-only audit notes
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    lead_id TEXT NOT NULL,
    type TEXT NOT NULL,
    text TEXT NOT NULL,
    previous_stage TEXT,
    new_stage TEXT,
    created_at TEXT NOT NULL,
    FOREIGN KEY (lead_id) REFERENCES leads(id)
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_leads_stage ON leads(stage);
CREATE INDEX IF NOT EXISTS idx_leads_dnc ON leads(do_not_contact);
CREATE INDEX IF NOT EXISTS idx_notes_lead ON notes(lead_id);
"#;

/// Parse a string value from the database, returning a rusqlite error on parse failure.
fn parse_db<T: std::str::FromStr>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    value.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid value '{value}' in column '{column}'"
            ))),
        )
    })
}

/// Parse an RFC3339 timestamp from the database.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(Error::CorruptedData(format!(
                    "invalid timestamp '{value}' in column '{column}'"
                ))),
            )
        })
}

/// Parse a date-only column (YYYY-MM-DD).
fn parse_date(value: &str, column: &str) -> std::result::Result<NaiveDate, rusqlite::Error> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid date '{value}' in column '{column}'"
            ))),
        )
    })
}

/// Parse an optional stage column.
fn parse_stage_opt(value: Option<String>) -> std::result::Result<Option<Stage>, rusqlite::Error> {
    match value {
        None => Ok(None),
        Some(s) => parse_db(&s, "stage").map(Some),
    }
}

/// Split a full name into the persisted first_name/last_name pair.
fn split_name(name: &str) -> (String, String) {
    match name.trim().split_once(' ') {
        Some((first, last)) => (first.to_string(), last.trim().to_string()),
        None => (name.trim().to_string(), String::new()),
    }
}

/// Join the persisted first_name/last_name pair back into a full name.
fn join_name(first: &str, last: &str) -> String {
    if last.is_empty() {
        first.to_string()
    } else {
        format!("{first} {last}")
    }
}

/// Run schema creation and all migrations on a database connection.
///
/// Applies the canonical schema and runs idempotent migrations to upgrade
/// older databases that may be missing columns.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    migrate_add_ready_to_move(conn)?;
    Ok(())
}

/// Migration: Add ready_to_move column to existing databases.
fn migrate_add_ready_to_move(conn: &Connection) -> Result<()> {
    let has_column: bool = conn
        .query_row(
            "SELECT COUNT(*) > 0 FROM pragma_table_info('leads') WHERE name = 'ready_to_move'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(false);

    if !has_column {
        conn.execute(
            "ALTER TABLE leads ADD COLUMN ready_to_move INTEGER NOT NULL DEFAULT 0",
            [],
        )?;
    }
    Ok(())
}

/// SQLite database connection with lead tracker operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database connection at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        // Enable foreign keys and WAL mode for concurrency
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Create a new lead, persisting any notes it already carries.
    pub fn create_lead(&mut self, lead: &mut Lead) -> Result<()> {
        let tx = self.conn.transaction()?;
        let (first, last) = split_name(&lead.name);
        tx.execute(
            "INSERT INTO leads (id, first_name, last_name, email, phone, stage,
             lead_source, date_added, last_contact_date, flagged, do_not_contact,
             ready_to_move)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                lead.id,
                first,
                last,
                lead.email,
                lead.phone,
                lead.stage.as_str(),
                lead.source,
                lead.date_added.format("%Y-%m-%d").to_string(),
                lead.last_contact.map(|d| d.format("%Y-%m-%d").to_string()),
                lead.flagged_for_next_stage,
                lead.do_not_contact,
                lead.ready_to_move,
            ],
        )?;
        insert_pending_notes(&tx, lead)?;
        tx.commit()?;
        Ok(())
    }

    /// Get a lead by ID, including its full note timeline.
    pub fn get_lead(&self, id: &str) -> Result<Lead> {
        let lead = self
            .conn
            .query_row(
                "SELECT id, first_name, last_name, email, phone, stage, lead_source,
                        date_added, last_contact_date, flagged, do_not_contact,
                        ready_to_move
                 FROM leads WHERE id = ?1",
                params![id],
                row_to_lead,
            )
            .optional()?;

        let mut lead = lead.ok_or_else(|| Error::LeadNotFound(id.to_string()))?;
        lead.notes = self.get_notes(id)?;
        Ok(lead)
    }

    /// Check if a lead exists.
    pub fn lead_exists(&self, id: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM leads WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Resolve a possibly-abbreviated lead ID.
    ///
    /// An exact match wins; otherwise a unique prefix match is accepted.
    pub fn resolve_id(&self, id: &str) -> Result<String> {
        if self.lead_exists(id)? {
            return Ok(id.to_string());
        }

        let mut stmt = self
            .conn
            .prepare("SELECT id FROM leads WHERE id LIKE ?1 || '%' ORDER BY id")?;
        let matches: Vec<String> = stmt
            .query_map(params![id], |row| row.get(0))?
            .collect::<std::result::Result<_, _>>()?;

        match matches.len() {
            0 => Err(Error::LeadNotFound(id.to_string())),
            1 => Ok(matches.into_iter().next().unwrap_or_default()),
            _ => Err(Error::AmbiguousId {
                prefix: id.to_string(),
                matches,
            }),
        }
    }

    /// List leads, optionally filtered by stage, do-not-contact, or the
    /// flagged hint. Note timelines are not loaded.
    pub fn list_leads(
        &self,
        stage: Option<Stage>,
        do_not_contact: Option<bool>,
        flagged_only: bool,
    ) -> Result<Vec<Lead>> {
        let mut sql = String::from(
            "SELECT id, first_name, last_name, email, phone, stage, lead_source,
                    date_added, last_contact_date, flagged, do_not_contact,
                    ready_to_move
             FROM leads WHERE 1=1",
        );
        let mut args: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(stage) = stage {
            sql.push_str(" AND stage = ?");
            args.push(Box::new(stage.as_str().to_string()));
        }
        if let Some(dnc) = do_not_contact {
            sql.push_str(" AND do_not_contact = ?");
            args.push(Box::new(dnc));
        }
        if flagged_only {
            sql.push_str(" AND flagged = 1");
        }
        sql.push_str(" ORDER BY date_added, id");

        let mut stmt = self.conn.prepare(&sql)?;
        let params_ref: Vec<&dyn rusqlite::ToSql> = args.iter().map(|a| a.as_ref()).collect();
        let leads = stmt
            .query_map(params_ref.as_slice(), row_to_lead)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(leads)
    }

    /// Persist a lead: update its row and insert any notes that have not
    /// been stored yet, all in one transaction.
    ///
    /// Newly inserted notes get their database-assigned IDs written back
    /// into the lead.
    pub fn save_lead(&mut self, lead: &mut Lead) -> Result<()> {
        let tx = self.conn.transaction()?;
        let (first, last) = split_name(&lead.name);
        let affected = tx.execute(
            "UPDATE leads SET first_name = ?1, last_name = ?2, email = ?3, phone = ?4,
             stage = ?5, lead_source = ?6, last_contact_date = ?7, flagged = ?8,
             do_not_contact = ?9, ready_to_move = ?10
             WHERE id = ?11",
            params![
                first,
                last,
                lead.email,
                lead.phone,
                lead.stage.as_str(),
                lead.source,
                lead.last_contact.map(|d| d.format("%Y-%m-%d").to_string()),
                lead.flagged_for_next_stage,
                lead.do_not_contact,
                lead.ready_to_move,
                lead.id,
            ],
        )?;

        if affected == 0 {
            return Err(Error::LeadNotFound(lead.id.clone()));
        }

        insert_pending_notes(&tx, lead)?;
        tx.commit()?;
        Ok(())
    }

    /// Get all notes for a lead in append order.
    pub fn get_notes(&self, lead_id: &str) -> Result<Vec<Note>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, lead_id, type, text, previous_stage, new_stage, created_at
             FROM notes WHERE lead_id = ?1 ORDER BY id",
        )?;
        let notes = stmt
            .query_map(params![lead_id], row_to_note)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(notes)
    }

    /// Delete a lead and its notes.
    pub fn delete_lead(&mut self, id: &str) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM notes WHERE lead_id = ?1", params![id])?;
        let affected = tx.execute("DELETE FROM leads WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(Error::LeadNotFound(id.to_string()));
        }
        tx.commit()?;
        Ok(())
    }

    /// Count all leads.
    pub fn count_leads(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM leads", [], |row| row.get(0))?;
        Ok(count)
    }
}

/// Insert all notes with id 0 and write back their assigned IDs.
fn insert_pending_notes(conn: &Connection, lead: &mut Lead) -> Result<()> {
    for note in lead.notes.iter_mut().filter(|n| n.id == 0) {
        conn.execute(
            "INSERT INTO notes (lead_id, type, text, previous_stage, new_stage, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                note.lead_id,
                note.note_type.as_str(),
                note.text,
                note.previous_stage.map(|s| s.as_str()),
                note.new_stage.map(|s| s.as_str()),
                note.created_at.to_rfc3339(),
            ],
        )?;
        note.id = conn.last_insert_rowid();
    }
    Ok(())
}

/// Map a leads row to a [`Lead`] (without notes).
fn row_to_lead(row: &Row<'_>) -> std::result::Result<Lead, rusqlite::Error> {
    let first: String = row.get(1)?;
    let last: String = row.get(2)?;
    let stage_str: String = row.get(5)?;
    let added_str: String = row.get(7)?;
    let last_contact_str: Option<String> = row.get(8)?;

    Ok(Lead {
        id: row.get(0)?,
        name: join_name(&first, &last),
        email: row.get(3)?,
        phone: row.get(4)?,
        stage: parse_db(&stage_str, "stage")?,
        source: row.get(6)?,
        date_added: parse_date(&added_str, "date_added")?,
        last_contact: last_contact_str
            .map(|s| parse_date(&s, "last_contact_date"))
            .transpose()?,
        notes: Vec::new(),
        flagged_for_next_stage: row.get(9)?,
        do_not_contact: row.get(10)?,
        ready_to_move: row.get(11)?,
    })
}

/// Map a notes row to a [`Note`].
fn row_to_note(row: &Row<'_>) -> std::result::Result<Note, rusqlite::Error> {
    let type_str: String = row.get(2)?;
    let prev: Option<String> = row.get(4)?;
    let new: Option<String> = row.get(5)?;
    let created_str: String = row.get(6)?;

    Ok(Note {
        id: row.get(0)?,
        lead_id: row.get(1)?,
        note_type: parse_db::<NoteType>(&type_str, "type")?,
        text: row.get(3)?,
        previous_stage: parse_stage_opt(prev)?,
        new_stage: parse_stage_opt(new)?,
        created_at: parse_timestamp(&created_str, "created_at")?,
    })
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
