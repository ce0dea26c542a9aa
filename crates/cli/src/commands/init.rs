// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use lb_core::Database;

use crate::config::{init_work_dir, write_gitignore};
use crate::error::{Error, Result};
use crate::id::validate_prefix;

pub fn run(prefix: Option<String>, path: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };

    let prefix = match prefix {
        Some(p) => p,
        None => derive_prefix_from_path(&target_path)?,
    };

    if !validate_prefix(&prefix) {
        return Err(Error::InvalidPrefix);
    }

    let work_dir = init_work_dir(&target_path, &prefix)?;

    // Initialize the database
    let db_path = work_dir.join("leads.db");
    Database::open(&db_path)?;

    write_gitignore(&work_dir)?;

    println!("Initialized lead tracker at {}", work_dir.display());
    println!("Prefix: {}", prefix);

    Ok(())
}

/// Derive a prefix from the directory name: lowercase it and keep only
/// ASCII alphanumerics.
fn derive_prefix_from_path(path: &Path) -> Result<String> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or(Error::InvalidPrefix)?;

    let prefix: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if validate_prefix(&prefix) {
        Ok(prefix)
    } else {
        Err(Error::InvalidPrefix)
    }
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
