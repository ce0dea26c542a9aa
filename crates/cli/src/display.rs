// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lb_core::{Lead, Note, NoteType};

/// Maximum line width for wrapped note text (excluding 4-space indent).
const WRAP_WIDTH: usize = 96;

/// Wrap text at word boundaries if it's a single line.
///
/// - If content contains newlines: return as-is (preserve user formatting)
/// - If content is single line >width: wrap at word boundaries
/// - If content is single line <=width: return as-is
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') {
        return content.to_string();
    }

    if content.len() <= width {
        return content.to_string();
    }

    let mut result = String::new();
    let mut current_line = String::new();

    for word in content.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            if !result.is_empty() {
                result.push('\n');
            }
            result.push_str(&current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        if !result.is_empty() {
            result.push('\n');
        }
        result.push_str(&current_line);
    }

    result
}

/// Format a single note with metadata line and indented content.
///
/// Output format:
/// ```text
///   2026-03-14 10:30 [call]
///     Left a voicemail about the listing.
/// ```
/// Stage-change notes show the transition on the metadata line.
pub fn format_note(note: &Note) -> Vec<String> {
    let mut lines = Vec::new();

    let timestamp = note.created_at.format("%Y-%m-%d %H:%M");
    let meta = match (note.note_type, note.previous_stage, note.new_stage) {
        (NoteType::StageChange, Some(prev), Some(new)) => {
            format!("  {} [stage_change] {} -> {}", timestamp, prev, new)
        }
        _ => format!("  {} [{}]", timestamp, note.note_type),
    };
    lines.push(meta);

    let wrapped = wrap_text(&note.text, WRAP_WIDTH);
    for line in wrapped.lines() {
        lines.push(format!("    {}", line));
    }

    lines
}

/// Format a single lead line for list output
pub fn format_lead_line(lead: &Lead) -> String {
    let mut markers = String::new();
    if lead.flagged_for_next_stage {
        markers.push_str(" [flagged]");
    }
    if lead.do_not_contact {
        markers.push_str(" [dnc]");
    }
    format!(
        "- [{}] ({}) {}{}",
        lead.id, lead.stage, lead.name, markers
    )
}

/// Format the full detail view of a lead, note timeline included.
pub fn format_lead_details(lead: &Lead) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Lead: {}", lead.id));
    lines.push(format!("Name: {}", lead.name));
    lines.push(format!("Stage: {}", lead.stage));
    if let Some(email) = &lead.email {
        lines.push(format!("Email: {}", email));
    }
    if let Some(phone) = &lead.phone {
        lines.push(format!("Phone: {}", phone));
    }
    lines.push(format!("Source: {}", lead.source));
    lines.push(format!("Added: {}", lead.date_added));
    if let Some(last) = lead.last_contact {
        lines.push(format!("Last contact: {}", last));
    }

    let mut flags = Vec::new();
    if lead.flagged_for_next_stage {
        flags.push("flagged-for-next-stage");
    }
    if lead.do_not_contact {
        flags.push("do-not-contact");
    }
    if lead.ready_to_move {
        flags.push("ready-to-move");
    }
    if !flags.is_empty() {
        lines.push(format!("Flags: {}", flags.join(", ")));
    }

    if !lead.notes.is_empty() {
        lines.push(String::new());
        lines.push("Notes:".to_string());
        for note in &lead.notes {
            lines.extend(format_note(note));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
