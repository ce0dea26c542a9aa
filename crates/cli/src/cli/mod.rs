// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::colors;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use lb_core::NoteType;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Id,
}

/// Note kinds a user can log through the general note path.
///
/// `stage_change` is deliberately absent: stage-change notes are produced
/// only by the lifecycle operations themselves.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum NoteKind {
    Call,
    Sms,
    Letter,
    Email,
    #[default]
    Other,
}

impl From<NoteKind> for NoteType {
    fn from(kind: NoteKind) -> Self {
        match kind {
            NoteKind::Call => NoteType::Call,
            NoteKind::Sms => NoteType::Sms,
            NoteKind::Letter => NoteType::Letter,
            NoteKind::Email => NoteType::Email,
            NoteKind::Other => NoteType::Other,
        }
    }
}

/// Outreach channels the send command can use.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum SendKind {
    #[default]
    Sms,
    Letter,
}

impl SendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SendKind::Sms => "sms",
            SendKind::Letter => "letter",
        }
    }

    pub fn note_type(&self) -> NoteType {
        match self {
            SendKind::Sms => NoteType::Sms,
            SendKind::Letter => NoteType::Letter,
        }
    }
}

#[derive(Parser)]
#[command(name = "lb")]
#[command(styles = colors::help_styles())]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A local CRM lead tracker with spintax outreach templating")]
#[command(
    long_about = "A local CRM lead tracker.\n\n\
    Track leads through the sales pipeline, keep an immutable audit trail of\n\
    every stage change, and render spintax templates for outbound SMS and letters."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize a lead tracker in the current directory
    Init {
        /// ID prefix for new leads (derived from the directory name if omitted)
        #[arg(long, short)]
        prefix: Option<String>,

        /// Directory to initialize (defaults to the current directory)
        #[arg(long)]
        path: Option<String>,
    },

    /// Create a new lead
    #[command(after_help = colors::examples("\
Examples:
  lb new \"Jane Doe\"                        Create a lead with name only
  lb new \"Jane Doe\" -e jane@example.com    Create with email
  lb new \"Jane Doe\" -s zillow              Record the acquisition source
  lb new \"Jane Doe\" --note \"Met at expo\"   Create with an initial note
  lb new \"Jane Doe\" -o id                  Create, output only the ID"))]
    New {
        /// Full contact name
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// Contact email
        #[arg(long, short)]
        email: Option<String>,

        /// Contact phone number
        #[arg(long, short)]
        phone: Option<String>,

        /// Acquisition source (e.g., "referral", "zillow", "cold-call")
        #[arg(long, short)]
        source: Option<String>,

        /// Add an initial note to the lead
        #[arg(long)]
        note: Option<String>,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List leads
    #[command(after_help = colors::examples("\
Examples:
  lb list                        List every lead
  lb list --stage qualified      Only leads at a given stage
  lb list --flagged              Only leads flagged as ready to advance
  lb list --dnc                  Only suppressed leads
  lb list -o json                One JSON object per line"))]
    List {
        /// Filter by stage (new, contacted, qualified, negotiating, closed, lost)
        #[arg(long)]
        stage: Option<String>,

        /// Show only do-not-contact leads
        #[arg(long, conflicts_with = "no_dnc")]
        dnc: bool,

        /// Hide do-not-contact leads
        #[arg(long, conflicts_with = "dnc")]
        no_dnc: bool,

        /// Show only leads flagged for the next stage
        #[arg(long)]
        flagged: bool,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show full details for lead(s), including the note timeline
    #[command(arg_required_else_help = true)]
    Show {
        /// Lead ID(s)
        #[arg(required = true)]
        ids: Vec<String>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Advance lead(s) to the next pipeline stage
    #[command(arg_required_else_help = true, after_help = colors::examples("\
Examples:
  lb advance lb-1a2b             new -> contacted (and so on up the pipeline)
  lb advance lb-1a2b lb-3c4d     Advance several leads at once"))]
    Advance {
        /// Lead ID(s)
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Flag a lead as ready to advance (or clear the flag)
    Flag {
        /// Lead ID
        id: String,

        /// Clear the flag instead of setting it
        #[arg(long)]
        clear: bool,
    },

    /// Edit a lead attribute
    #[command(after_help = colors::examples("\
Examples:
  lb edit lb-1a2b name \"Janet Doe\"        Rename the contact
  lb edit lb-1a2b email jd@example.com    Update the email
  lb edit lb-1a2b stage lost              Direct stage edit (audited)
  lb edit lb-1a2b stage contacted         Backward moves are allowed here"))]
    Edit {
        /// Lead ID
        id: String,

        /// Attribute to edit (name, email, phone, source, stage)
        attr: String,

        /// New value
        value: String,
    },

    /// Mark a lead as do-not-contact (or clear the flag)
    Dnc {
        /// Lead ID
        id: String,

        /// Remove the do-not-contact flag
        #[arg(long)]
        clear: bool,
    },

    /// Log a note on a lead
    #[command(after_help = colors::examples("\
Examples:
  lb note lb-1a2b \"Left a voicemail\" -k call     Log a call
  lb note lb-1a2b \"Asked about pricing\"          Log a general note"))]
    Note {
        /// Lead ID
        id: String,

        /// Note text
        #[arg(value_parser = non_empty_string)]
        text: String,

        /// Note kind (call, sms, letter, email, other)
        #[arg(long = "kind", short = 'k', value_enum, default_value = "other")]
        kind: NoteKind,
    },

    /// Validate a spintax template and render sample variants
    #[command(after_help = colors::examples("\
Examples:
  lb preview \"{Hi|Hello} Jane\"            Render one variant
  lb preview \"{Hi|Hello}, any interest?\" -n 5
                                          Render five variants"))]
    Preview {
        /// Spintax template text
        template: String,

        /// Number of variants to render
        #[arg(long = "count", short = 'n', default_value = "1")]
        count: usize,
    },

    /// Render a spintax template and send it to a lead
    #[command(after_help = colors::examples("\
Examples:
  lb send lb-1a2b \"{Hi|Hello}, still selling?\"          Send an SMS
  lb send lb-1a2b \"Dear owner, ...\" --kind letter       Queue a letter"))]
    Send {
        /// Lead ID
        id: String,

        /// Spintax template for the message body
        template: String,

        /// Outreach channel (sms, letter)
        #[arg(long = "kind", short = 'k', value_enum, default_value = "sms")]
        kind: SendKind,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
