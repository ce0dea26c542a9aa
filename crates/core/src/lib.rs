// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lb-core: Shared library for the leadbook CRM lead tracker
//!
//! This crate provides the lead data model, the pipeline lifecycle state
//! machine, the spintax template engine, and the SQLite persistence layer
//! used by the `lb` CLI.

pub mod db;
pub mod error;
pub mod lead;
pub mod lifecycle;
pub mod spintax;

pub use db::Database;
pub use error::{Error, Result};
pub use lead::{Lead, LeadUpdate, Note, NoteType, Stage};
