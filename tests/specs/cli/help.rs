// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for help output and shell completions.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;
use yare::parameterized;

#[test]
fn top_level_help_lists_every_command() {
    let output = lb().arg("--help").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    for command in [
        "init", "new", "list", "show", "advance", "flag", "edit", "dnc", "note", "preview",
        "send", "completions",
    ] {
        assert!(stdout.contains(command), "help is missing '{command}'");
    }
}

#[parameterized(
    new = { "new" },
    list = { "list" },
    advance = { "advance" },
    edit = { "edit" },
    note = { "note" },
    preview = { "preview" },
    send = { "send" },
)]
fn subcommand_help_shows_examples(command: &str) {
    let output = lb().arg(command).arg("--help").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Examples:"), "{command} help has no examples");
}

#[test]
fn version_flag_works() {
    lb().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lb "));
}

#[parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
)]
fn completions_generate_for_common_shells(shell: &str) {
    let output = lb().arg("completions").arg(shell).output().unwrap();
    assert!(output.status.success());
    assert!(!output.stdout.is_empty());
}

#[test]
fn bare_invocation_prints_usage() {
    lb().assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
