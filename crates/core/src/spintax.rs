// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spintax template engine.
//!
//! Spintax is a small templating syntax where `{a|b|c}` marks a group of
//! interchangeable variants. [`render`] picks one option per group
//! uniformly at random so bulk outreach messages are not byte-identical;
//! [`validate`] checks a template is well-formed first.
//!
//! Only one level of groups is supported. Nesting is rejected by
//! validation, not silently flattened.

use rand::Rng;
use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::error::{Error, Result};

// Pre-compiled group pattern. Using match with unreachable! since the
// pattern is hard-coded and known-valid.
static GROUP_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"\{([^{}]*)\}") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// Check that a template is well-formed.
///
/// Plain text without braces is always valid. Deterministic: the check
/// never consults randomness.
///
/// # Errors
///
/// - [`Error::MismatchedBraces`] when the `{` and `}` counts differ.
/// - [`Error::EmptyVariation`] when a group has a leading or trailing
///   empty option (`{|` or `|}`).
/// - [`Error::NestedSpintax`] when a brace opens or closes inside another
///   group's boundaries.
pub fn validate(text: &str) -> Result<()> {
    let open = text.matches('{').count();
    let close = text.matches('}').count();
    if open != close {
        return Err(Error::MismatchedBraces { open, close });
    }

    if text.contains("{|") || text.contains("|}") {
        return Err(Error::EmptyVariation);
    }

    // A '{' while a group is already open means a nested group.
    let mut in_group = false;
    for c in text.chars() {
        match c {
            '{' if in_group => return Err(Error::NestedSpintax),
            '{' => in_group = true,
            '}' => in_group = false,
            _ => {}
        }
    }

    // Symmetric case: a '}' with another '}' still pending to its right.
    let mut in_group = false;
    for c in text.chars().rev() {
        match c {
            '}' if in_group => return Err(Error::NestedSpintax),
            '}' => in_group = true,
            '{' => in_group = false,
            _ => {}
        }
    }

    Ok(())
}

/// Render one concrete instance of a template.
///
/// Every `{a|b|c}` group is replaced by one of its options, chosen
/// independently and uniformly at random, with surrounding whitespace
/// trimmed from the chosen option. Brace-free text is returned unchanged.
///
/// This does not validate: run [`validate`] first if malformed input must
/// be reported rather than substituted best-effort.
pub fn render(text: &str) -> String {
    if !text.contains('{') {
        return text.to_string();
    }

    let mut rng = rand::rng();
    GROUP_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let options: Vec<&str> = caps[1].split('|').map(str::trim).collect();
            let pick = rng.random_range(0..options.len());
            options[pick].to_string()
        })
        .into_owned()
}

#[cfg(test)]
#[path = "spintax_tests.rs"]
mod tests;
