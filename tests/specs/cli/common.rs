// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn lb() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("lb").unwrap()
}

/// Helper to create an initialized temp directory
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    lb().arg("init")
        .arg("--prefix")
        .arg("test")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Create a lead and return its ID
pub fn create_lead(temp: &TempDir, name: &str) -> String {
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

/// Create a lead with a phone number and return its ID
pub fn create_lead_with_phone(temp: &TempDir, name: &str, phone: &str) -> String {
    let output = lb()
        .arg("new")
        .arg(name)
        .arg("-p")
        .arg(phone)
        .arg("-o")
        .arg("id")
        .current_dir(temp.path())
        .output()
        .unwrap();
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Capture `lb show <id>` stdout as a string
pub fn show(temp: &TempDir, id: &str) -> String {
    let output = lb()
        .arg("show")
        .arg(id)
        .current_dir(temp.path())
        .output()
        .unwrap();
    String::from_utf8_lossy(&output.stdout).to_string()
}
