// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for lb-core operations.

use thiserror::Error;

/// All possible errors that can occur in lb-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("lead not found: {0}")]
    LeadNotFound(String),

    #[error("ambiguous lead ID '{prefix}' matches: {}", matches.join(", "))]
    AmbiguousId {
        prefix: String,
        matches: Vec<String>,
    },

    #[error("no forward stage: {id} is already at '{stage}'")]
    NoForwardStage { id: String, stage: String },

    #[error(
        "invalid stage: '{0}'\n  hint: valid stages are: new, contacted, qualified, negotiating, closed, lost"
    )]
    InvalidStage(String),

    #[error("invalid note type: '{0}'\n  hint: valid types are: stage_change, call, sms, letter, email, other")]
    InvalidNoteType(String),

    #[error("mismatched braces: {open} opening vs {close} closing")]
    MismatchedBraces { open: usize, close: usize },

    #[error("empty variation option\n  hint: every option in {{a|b|c}} must be non-empty")]
    EmptyVariation,

    #[error("nested spintax is not supported\n  hint: only one level of {{a|b}} groups is allowed")]
    NestedSpintax,

    #[error("{0}")]
    InvalidInput(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for lb-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
