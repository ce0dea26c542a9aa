// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `lb note` command.

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
    call = { "call" },
    sms = { "sms" },
    letter = { "letter" },
    email = { "email" },
    other = { "other" },
)]
fn note_kinds_show_in_the_timeline(kind: &str) {
    let temp = init_temp();
    let id = create_lead(&temp, "Jane Doe");

    lb().arg("note")
        .arg(&id)
        .arg("Checking in")
        .arg("-k")
        .arg(kind)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Added {} note to {}",
            kind, id
        )));

    lb().arg("show")
        .arg(&id)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("[{}]", kind)))
        .stdout(predicate::str::contains("Checking in"));
}

#[test]
fn note_defaults_to_other_kind() {
    let temp = init_temp();
    let id = create_lead(&temp, "Jane Doe");

    lb().arg("note")
        .arg(&id)
        .arg("General remark")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Added other note"));
}

#[test]
fn note_updates_last_contact() {
    let temp = init_temp();
    let id = create_lead(&temp, "Jane Doe");

    lb().arg("note")
        .arg(&id)
        .arg("Left a voicemail")
        .arg("-k")
        .arg("call")
        .current_dir(temp.path())
        .assert()
        .success();

    lb().arg("show")
        .arg(&id)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Last contact:"));
}

#[test]
fn notes_are_listed_oldest_first() {
    let temp = init_temp();
    let id = create_lead(&temp, "Jane Doe");

    for text in ["first touch", "second touch", "third touch"] {
        lb().arg("note")
            .arg(&id)
            .arg(text)
            .current_dir(temp.path())
            .assert()
            .success();
    }

    let output = lb()
        .arg("show")
        .arg(&id)
        .current_dir(temp.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let first = stdout.find("first touch").unwrap();
    let second = stdout.find("second touch").unwrap();
    let third = stdout.find("third touch").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn stage_change_kind_is_not_accepted() {
    let temp = init_temp();
    let id = create_lead(&temp, "Jane Doe");

    lb().arg("note")
        .arg(&id)
        .arg("Trying to forge an audit entry")
        .arg("-k")
        .arg("stage_change")
        .current_dir(temp.path())
        .assert()
        .failure();
}

#[test]
fn blank_note_text_is_rejected() {
    let temp = init_temp();
    let id = create_lead(&temp, "Jane Doe");

    lb().arg("note")
        .arg(&id)
        .arg("   ")
        .current_dir(temp.path())
        .assert()
        .failure();
}

#[test]
fn note_on_unknown_lead_fails() {
    let temp = init_temp();

    lb().arg("note")
        .arg("test-ffff")
        .arg("Hello")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("lead not found"));
}
