// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core lead types for the leadbook CRM tracker.
//!
//! This module contains the fundamental data types: Lead, Stage, Note,
//! NoteType, and LeadUpdate.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Pipeline stage of a lead.
///
/// The forward path is `New -> Contacted -> Qualified -> Negotiating ->
/// Closed`. `Lost` sits outside the forward path and is only reachable
/// through an explicit edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Freshly captured, no contact yet. Initial stage for new leads.
    New,
    /// First touch made.
    Contacted,
    /// Confirmed as a real prospect.
    Qualified,
    /// Terms are being worked out.
    Negotiating,
    /// Deal closed. Terminal on the forward path.
    Closed,
    /// Dropped out of the pipeline. Not reachable via the guided advance.
    Lost,
}

impl Stage {
    /// Returns the string representation used in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::New => "new",
            Stage::Contacted => "contacted",
            Stage::Qualified => "qualified",
            Stage::Negotiating => "negotiating",
            Stage::Closed => "closed",
            Stage::Lost => "lost",
        }
    }

    /// Returns the human-readable label used in note text.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::New => "New",
            Stage::Contacted => "Contacted",
            Stage::Qualified => "Qualified",
            Stage::Negotiating => "Negotiating",
            Stage::Closed => "Closed",
            Stage::Lost => "Lost",
        }
    }

    /// The next stage on the forward path, or `None` when no forward
    /// successor exists (`Closed` and `Lost`).
    pub fn next(&self) -> Option<Stage> {
        match self {
            Stage::New => Some(Stage::Contacted),
            Stage::Contacted => Some(Stage::Qualified),
            Stage::Qualified => Some(Stage::Negotiating),
            Stage::Negotiating => Some(Stage::Closed),
            Stage::Closed | Stage::Lost => None,
        }
    }

    /// Returns true if this stage has no forward successor.
    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Stage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "new" => Ok(Stage::New),
            "contacted" => Ok(Stage::Contacted),
            "qualified" => Ok(Stage::Qualified),
            "negotiating" => Ok(Stage::Negotiating),
            "closed" => Ok(Stage::Closed),
            "lost" => Ok(Stage::Lost),
            _ => Err(Error::InvalidStage(s.to_string())),
        }
    }
}

/// Classification of notes on a lead's timeline.
///
/// Only `StageChange` and `Other` carry lifecycle semantics; the rest are
/// cosmetic tags for outreach logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteType {
    /// Records a stage transition, with previous and new stage attached.
    StageChange,
    /// Phone call logged.
    Call,
    /// Outbound SMS logged.
    Sms,
    /// Outbound letter logged.
    Letter,
    /// Email logged.
    Email,
    /// Anything else, including do-not-contact audit entries.
    Other,
}

impl NoteType {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteType::StageChange => "stage_change",
            NoteType::Call => "call",
            NoteType::Sms => "sms",
            NoteType::Letter => "letter",
            NoteType::Email => "email",
            NoteType::Other => "other",
        }
    }
}

impl fmt::Display for NoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NoteType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "stage_change" => Ok(NoteType::StageChange),
            "call" => Ok(NoteType::Call),
            "sms" => Ok(NoteType::Sms),
            "letter" => Ok(NoteType::Letter),
            "email" => Ok(NoteType::Email),
            "other" => Ok(NoteType::Other),
            _ => Err(Error::InvalidNoteType(s.to_string())),
        }
    }
}

/// An immutable audit entry on a lead's timeline.
///
/// Notes are append-only: once attached they are never edited or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Database-assigned identifier (0 until persisted).
    pub id: i64,
    /// The lead this note belongs to.
    pub lead_id: String,
    /// What kind of event this note records.
    pub note_type: NoteType,
    /// Human-readable description of the event.
    pub text: String,
    /// Stage before the transition (stage_change notes only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_stage: Option<Stage>,
    /// Stage after the transition (stage_change notes only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_stage: Option<Stage>,
    /// When the note was appended.
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Creates a new note with the current timestamp.
    pub fn new(lead_id: String, note_type: NoteType, text: String) -> Self {
        Note {
            id: 0, // Will be set by database
            lead_id,
            note_type,
            text,
            previous_stage: None,
            new_stage: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the previous and new stage for this note (builder pattern).
    pub fn with_stages(mut self, previous: Stage, new: Stage) -> Self {
        self.previous_stage = Some(previous);
        self.new_stage = Some(new);
        self
    }

    /// Sets a specific timestamp for this note.
    pub fn with_timestamp(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// The primary entity representing a tracked contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    /// Unique identifier (format: `{prefix}-{hash}`).
    pub id: String,
    /// Full contact name.
    pub name: String,
    /// Contact email, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone number, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Current pipeline stage.
    pub stage: Stage,
    /// Acquisition channel, set at creation.
    pub source: String,
    /// When the lead was captured (date only, set once).
    pub date_added: NaiveDate,
    /// Last touch date, updated when a note is logged through the
    /// general note path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_contact: Option<NaiveDate>,
    /// Timeline of audit notes, append-only, in chronological order.
    pub notes: Vec<Note>,
    /// Operator hint: ready to advance. Cleared when the lead advances.
    pub flagged_for_next_stage: bool,
    /// Suppresses future outreach. Toggling is audited.
    pub do_not_contact: bool,
    /// Auxiliary hint carried through persistence, never mutated by the
    /// lifecycle operations.
    pub ready_to_move: bool,
}

impl Lead {
    /// Creates a new lead at the start of the pipeline with all flags off.
    pub fn new(id: String, name: String, source: String, date_added: NaiveDate) -> Self {
        Lead {
            id,
            name,
            email: None,
            phone: None,
            stage: Stage::New,
            source,
            date_added,
            last_contact: None,
            notes: Vec::new(),
            flagged_for_next_stage: false,
            do_not_contact: false,
            ready_to_move: false,
        }
    }
}

/// A partial update applied through the general edit path.
///
/// Absent fields are left untouched. A stage reassignment here accepts any
/// target, including `Lost` and backward moves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub source: Option<String>,
    pub stage: Option<Stage>,
}

#[cfg(test)]
#[path = "lead_tests.rs"]
mod tests;
