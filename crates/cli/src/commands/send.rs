// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;
use lb_core::{spintax, Database, Note};

use super::open_db;
use crate::cli::SendKind;
use crate::error::{Error, Result};
use crate::outreach::{ConsoleSender, MessageSender};

pub fn run(id: &str, template: &str, kind: SendKind) -> Result<()> {
    let (mut db, _) = open_db()?;
    run_impl(&mut db, id, template, kind, &ConsoleSender)
}

/// Internal implementation that accepts db and sender for testing.
pub(crate) fn run_impl(
    db: &mut Database,
    id: &str,
    template: &str,
    kind: SendKind,
    sender: &dyn MessageSender,
) -> Result<()> {
    let resolved = db.resolve_id(id)?;
    let mut lead = db.get_lead(&resolved)?;

    if lead.do_not_contact {
        return Err(Error::DoNotContact(resolved));
    }

    // Validate before rendering so malformed templates are reported
    // instead of substituted best-effort.
    spintax::validate(template)?;
    let body = spintax::render(template);

    let recipient = match kind {
        SendKind::Sms => lead
            .phone
            .clone()
            .ok_or_else(|| Error::MissingPhone(resolved.clone()))?,
        SendKind::Letter => lead.name.clone(),
    };

    let provider_id = sender.send(&recipient, &body)?;

    let note = Note::new(resolved.clone(), kind.note_type(), body);
    lead.add_note(note, Utc::now().date_naive());
    db.save_lead(&mut lead)?;

    println!("Sent {} to {} ({})", kind.as_str(), resolved, provider_id);
    Ok(())
}

#[cfg(test)]
#[path = "send_tests.rs"]
mod tests;
