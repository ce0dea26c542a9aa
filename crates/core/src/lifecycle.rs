// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lead lifecycle state machine.
//!
//! Every stage mutation appends exactly one `stage_change` note and every
//! do-not-contact toggle appends exactly one `other` note. Notes are built
//! fully before the lead is touched, so a lead is never left with a stage
//! change and no matching audit entry (or the reverse).
//!
//! These operations only mutate the in-memory [`Lead`]; persisting the
//! result is the caller's job (see [`crate::db::Database::save_lead`]).

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{Error, Result};
use crate::lead::{Lead, LeadUpdate, Note, NoteType, Stage};

/// Builds the audit note for a stage transition.
fn stage_change_note(lead_id: &str, from: Stage, to: Stage, now: DateTime<Utc>) -> Note {
    Note::new(
        lead_id.to_string(),
        NoteType::StageChange,
        format!("Status changed from {} to {}", from.label(), to.label()),
    )
    .with_stages(from, to)
    .with_timestamp(now)
}

impl Lead {
    /// The next stage on the forward path, or `None` when the lead sits
    /// at a stage with no forward successor.
    pub fn next_stage(&self) -> Option<Stage> {
        self.stage.next()
    }

    /// Guided advance: move to the next forward stage.
    ///
    /// Clears `flagged_for_next_stage` and appends the `stage_change`
    /// audit note. Fails with [`Error::NoForwardStage`] when the lead has
    /// no forward successor, leaving the lead unmodified.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<Stage> {
        let next = self.stage.next().ok_or_else(|| Error::NoForwardStage {
            id: self.id.clone(),
            stage: self.stage.to_string(),
        })?;

        let note = stage_change_note(&self.id, self.stage, next, now);
        self.stage = next;
        self.flagged_for_next_stage = false;
        self.notes.push(note);
        Ok(next)
    }

    /// Sets or clears the ready-to-advance hint.
    ///
    /// A lightweight operator hint, not an audited event: no note is
    /// appended and the stage does not change.
    pub fn set_flagged(&mut self, flagged: bool) {
        self.flagged_for_next_stage = flagged;
    }

    /// General edit: applies a partial update.
    ///
    /// A stage reassignment accepts any target, including `Lost` and
    /// backward moves, and appends the same `stage_change` note as the
    /// guided advance. Returns the `(previous, new)` pair when the stage
    /// actually changed.
    pub fn apply(&mut self, update: LeadUpdate, now: DateTime<Utc>) -> Option<(Stage, Stage)> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = Some(email);
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(source) = update.source {
            self.source = source;
        }

        match update.stage {
            Some(new_stage) if new_stage != self.stage => {
                let previous = self.stage;
                let note = stage_change_note(&self.id, previous, new_stage, now);
                self.stage = new_stage;
                self.notes.push(note);
                Some((previous, new_stage))
            }
            _ => None,
        }
    }

    /// Sets the do-not-contact flag, always appending one audit note.
    ///
    /// Touches no other field: stage and last-contact date stay as they
    /// are.
    pub fn set_do_not_contact(&mut self, do_not_contact: bool, now: DateTime<Utc>) {
        let text = if do_not_contact {
            "Lead marked as Do Not Contact"
        } else {
            "Do Not Contact flag removed"
        };
        let note = Note::new(self.id.clone(), NoteType::Other, text.to_string())
            .with_timestamp(now);
        self.do_not_contact = do_not_contact;
        self.notes.push(note);
    }

    /// General note path used for call/SMS/letter/email logging.
    ///
    /// Appends the caller-supplied note and updates the last-contact date.
    pub fn add_note(&mut self, note: Note, today: NaiveDate) {
        self.last_contact = Some(today);
        self.notes.push(note);
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
