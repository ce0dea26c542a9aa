// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the lbrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'lb init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("invalid prefix: must be 2+ lowercase alphanumeric with at least one letter")]
    InvalidPrefix,

    #[error("unknown attribute: '{attr}'\n  hint: editable attributes are: name, email, phone, source, stage")]
    UnknownAttribute { attr: String },

    #[error("lead {0} is marked do-not-contact\n  hint: clear the flag with 'lb dnc {0} --clear' before sending")]
    DoNotContact(String),

    #[error("lead {0} has no phone number on file")]
    MissingPhone(String),

    #[error("could not generate a unique lead ID")]
    IdGenerationFailed,

    #[error("{0}")]
    InvalidInput(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] lb_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for lbrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
