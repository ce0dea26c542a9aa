// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `lb edit` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use yare::parameterized;

fn lb() -> Command {
    cargo_bin_cmd!("lb")
}

fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    lb().arg("init")
        .arg("--prefix")
        .arg("test")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

fn create_lead(temp: &TempDir, name: &str) -> String {
    let output = lb()
        .arg("new")
        .arg(name)
        .arg("-o")
        .arg("id")
        .current_dir(temp.path())
        .output()
        .unwrap();
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[parameterized(
    name = { "name", "Janet Doe", "Name: Janet Doe" },
    email = { "email", "jd@example.com", "Email: jd@example.com" },
    phone = { "phone", "+15559876543", "Phone: +15559876543" },
    source = { "source", "referral", "Source: referral" },
)]
fn edit_updates_the_attribute(attr: &str, value: &str, expected: &str) {
    let temp = init_temp();
    let id = create_lead(&temp, "Jane Doe");

    lb().arg("edit")
        .arg(&id)
        .arg(attr)
        .arg(value)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Updated {} of {}",
            attr, id
        )));

    lb().arg("show")
        .arg(&id)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn edit_stage_reports_the_transition() {
    let temp = init_temp();
    let id = create_lead(&temp, "Jane Doe");

    lb().arg("edit")
        .arg(&id)
        .arg("stage")
        .arg("qualified")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Updated stage of {}: new -> qualified",
            id
        )));
}

#[test]
fn edit_stage_to_lost_is_audited() {
    let temp = init_temp();
    let id = create_lead(&temp, "Jane Doe");

    lb().arg("edit")
        .arg(&id)
        .arg("stage")
        .arg("lost")
        .current_dir(temp.path())
        .assert()
        .success();

    lb().arg("show")
        .arg(&id)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Stage: lost"))
        .stdout(predicate::str::contains("Status changed from New to Lost"));
}

#[test]
fn edit_stage_backward_is_allowed() {
    let temp = init_temp();
    let id = create_lead(&temp, "Jane Doe");

    lb().arg("advance")
        .arg(&id)
        .current_dir(temp.path())
        .assert()
        .success();
    lb().arg("edit")
        .arg(&id)
        .arg("stage")
        .arg("new")
        .current_dir(temp.path())
        .assert()
        .success();

    lb().arg("show")
        .arg(&id)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Stage: new"))
        .stdout(predicate::str::contains("Status changed from Contacted to New"));
}

#[test]
fn edit_stage_to_the_same_value_adds_no_note() {
    let temp = init_temp();
    let id = create_lead(&temp, "Jane Doe");

    lb().arg("edit")
        .arg(&id)
        .arg("stage")
        .arg("new")
        .current_dir(temp.path())
        .assert()
        .success();

    let output = lb()
        .arg("show")
        .arg(&id)
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Notes:"));
}

#[test]
fn edit_rejects_unknown_stage_values() {
    let temp = init_temp();
    let id = create_lead(&temp, "Jane Doe");

    lb().arg("edit")
        .arg(&id)
        .arg("stage")
        .arg("warm")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid stage"))
        .stderr(predicate::str::contains("hint"));
}

#[test]
fn edit_rejects_unknown_attributes() {
    let temp = init_temp();
    let id = create_lead(&temp, "Jane Doe");

    lb().arg("edit")
        .arg(&id)
        .arg("zip")
        .arg("90210")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown attribute"));
}

#[test]
fn edit_unknown_lead_fails() {
    let temp = init_temp();

    lb().arg("edit")
        .arg("test-ffff")
        .arg("name")
        .arg("Nobody")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("lead not found"));
}
