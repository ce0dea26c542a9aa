// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Full-workflow specs: a lead travels the whole pipeline with outreach
//! along the way, and the audit trail tells the story afterwards.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;

#[test]
fn a_lead_travels_the_whole_pipeline() {
    let temp = init_temp();
    let id = create_lead_with_phone(&temp, "Jane Doe", "+15551234567");

    // First touch: an SMS from a spintax template
    lb().arg("send")
        .arg(&id)
        .arg("{Hi|Hello} Jane, still thinking of selling?")
        .current_dir(temp.path())
        .assert()
        .success();

    // She replied, so move her along and log the call
    lb().arg("advance")
        .arg(&id)
        .current_dir(temp.path())
        .assert()
        .success();
    lb().arg("note")
        .arg(&id)
        .arg("Wants a valuation next week")
        .arg("-k")
        .arg("call")
        .current_dir(temp.path())
        .assert()
        .success();

    // Qualify, flag as ready, then advance twice more to close
    lb().arg("advance")
        .arg(&id)
        .current_dir(temp.path())
        .assert()
        .success();
    lb().arg("flag")
        .arg(&id)
        .current_dir(temp.path())
        .assert()
        .success();
    lb().arg("advance")
        .arg(&id)
        .current_dir(temp.path())
        .assert()
        .success();
    lb().arg("advance")
        .arg(&id)
        .current_dir(temp.path())
        .assert()
        .success();

    let details = show(&temp, &id);
    assert!(details.contains("Stage: closed"));
    assert!(!details.contains("flagged-for-next-stage"));
    assert!(details.contains("Status changed from New to Contacted"));
    assert!(details.contains("Status changed from Contacted to Qualified"));
    assert!(details.contains("Status changed from Qualified to Negotiating"));
    assert!(details.contains("Status changed from Negotiating to Closed"));
    assert!(details.contains("Wants a valuation next week"));
    assert!(details.contains("Last contact:"));
}

#[test]
fn a_dead_lead_is_suppressed_and_lost() {
    let temp = init_temp();
    let id = create_lead_with_phone(&temp, "Bo Diddley", "+15559876543");

    lb().arg("send")
        .arg(&id)
        .arg("Hello, any interest?")
        .current_dir(temp.path())
        .assert()
        .success();

    // Asked to never be contacted again
    lb().arg("dnc")
        .arg(&id)
        .current_dir(temp.path())
        .assert()
        .success();
    lb().arg("edit")
        .arg(&id)
        .arg("stage")
        .arg("lost")
        .current_dir(temp.path())
        .assert()
        .success();

    // Outreach is now blocked, and so is advancing
    lb().arg("send")
        .arg(&id)
        .arg("One more try")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("do-not-contact"));
    lb().arg("advance")
        .arg(&id)
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no forward stage"));

    let details = show(&temp, &id);
    assert!(details.contains("Stage: lost"));
    assert!(details.contains("do-not-contact"));
    assert!(details.contains("Lead marked as Do Not Contact"));
    assert!(details.contains("Status changed from New to Lost"));
}

#[test]
fn data_survives_across_invocations() {
    let temp = init_temp();
    let id = create_lead(&temp, "Jane Doe");

    lb().arg("advance")
        .arg(&id)
        .current_dir(temp.path())
        .assert()
        .success();

    // Each CLI invocation is a fresh process against the same database
    lb().arg("list")
        .arg("--stage")
        .arg("contacted")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"));
}
