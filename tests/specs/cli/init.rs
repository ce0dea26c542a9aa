// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `lb init` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;
use yare::parameterized;

#[test]
fn init_creates_the_work_dir() {
    let temp = TempDir::new().unwrap();

    lb().arg("init")
        .arg("--prefix")
        .arg("acme")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized lead tracker at"))
        .stdout(predicate::str::contains("Prefix: acme"));

    assert!(temp.path().join(".leadbook").is_dir());
    assert!(temp.path().join(".leadbook/config.toml").is_file());
    assert!(temp.path().join(".leadbook/leads.db").is_file());
    assert!(temp.path().join(".leadbook/.gitignore").is_file());
}

#[test]
fn init_twice_fails() {
    let temp = init_temp();

    lb().arg("init")
        .arg("--prefix")
        .arg("test")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn gitignore_covers_the_database() {
    let temp = init_temp();

    let content = std::fs::read_to_string(temp.path().join(".leadbook/.gitignore")).unwrap();
    assert!(content.contains("leads.db"));
    assert!(content.contains("config.toml"));
}

#[parameterized(
    uppercase = { "ACME" },
    single_char = { "x" },
    digits_only = { "1234" },
    with_space = { "ac me" },
)]
fn init_rejects_invalid_prefixes(prefix: &str) {
    let temp = TempDir::new().unwrap();

    lb().arg("init")
        .arg("--prefix")
        .arg(prefix)
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid prefix"));
}

#[test]
fn prefix_defaults_to_the_directory_name() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("acme");
    std::fs::create_dir(&project).unwrap();

    lb().arg("init")
        .current_dir(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("Prefix: acme"));
}

#[test]
fn commands_find_the_tracker_from_a_subdirectory() {
    let temp = init_temp();
    let sub = temp.path().join("inner/deeper");
    std::fs::create_dir_all(&sub).unwrap();

    lb().arg("new")
        .arg("Jane Doe")
        .current_dir(&sub)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created lead test-"));
}
