// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lbrs - leadbook, a local CRM lead tracker library.
//!
//! This crate provides the functionality for the `lb` CLI tool, a local
//! lead tracker that stores data in a SQLite database and renders spintax
//! message templates for outbound SMS and letters.
//!
//! # Main Components
//!
//! - [`lb_core::Database`] - SQLite-backed storage for leads and notes
//! - [`Config`](config::Config) - Project configuration (id prefix, workspace location)
//! - [`lb_core::lead`] - Core data types (Lead, Note, Stage)
//! - [`Error`](error::Error) - Error types for all operations

mod cli;
pub mod colors;
mod commands;
mod display;

pub mod config;
pub mod error;
pub mod id;
pub mod outreach;

pub use cli::{Cli, Command, NoteKind, OutputFormat, SendKind};
pub use error::{Error, Result};

/// Dispatch a parsed command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { prefix, path } => commands::init::run(prefix, path),
        Command::New {
            name,
            email,
            phone,
            source,
            note,
            output,
        } => commands::new::run(&name, email, phone, source, note, output),
        Command::List {
            stage,
            dnc,
            no_dnc,
            flagged,
            output,
        } => commands::list::run(stage.as_deref(), dnc, no_dnc, flagged, output),
        Command::Show { ids, output } => commands::show::run(&ids, output),
        Command::Advance { ids } => commands::advance::run(&ids),
        Command::Flag { id, clear } => commands::flag::run(&id, !clear),
        Command::Edit { id, attr, value } => commands::edit::run(&id, &attr, &value),
        Command::Dnc { id, clear } => commands::dnc::run(&id, !clear),
        Command::Note { id, text, kind } => commands::note::run(&id, &text, kind),
        Command::Preview { template, count } => commands::preview::run(&template, count),
        Command::Send { id, template, kind } => commands::send::run(&id, &template, kind),
        Command::Completions { shell } => commands::completions::run(shell),
    }
}
