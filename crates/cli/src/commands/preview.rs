// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use lb_core::spintax;

use crate::error::Result;

/// Validate a template, then print the requested number of variants.
///
/// Validation failures are ordinary errors, not panics: the message names
/// what is wrong with the template and the process exits non-zero.
pub fn run(template: &str, count: usize) -> Result<()> {
    spintax::validate(template)?;

    for _ in 0..count.max(1) {
        println!("{}", spintax::render(template));
    }
    Ok(())
}

#[cfg(test)]
#[path = "preview_tests.rs"]
mod tests;
