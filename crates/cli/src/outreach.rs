// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Messaging-send collaborator boundary.
//!
//! The tracker hands a rendered message body to a [`MessageSender`] and
//! records the provider-assigned identifier it gets back. Delivery itself
//! is outside this crate; the bundled [`ConsoleSender`] is an offline stub
//! that fabricates identifiers so the rest of the flow can be exercised
//! without a telephony account.

use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::error::Result;

/// A channel that can deliver a message body to a recipient.
///
/// `recipient` is a phone number for SMS or a mailing name for letters;
/// the return value is the provider-assigned message identifier.
pub trait MessageSender {
    fn send(&self, recipient: &str, body: &str) -> Result<String>;
}

/// Offline sender stub. Accepts everything and fabricates a `msg-` id.
pub struct ConsoleSender;

impl MessageSender for ConsoleSender {
    fn send(&self, recipient: &str, body: &str) -> Result<String> {
        let input = format!("{}{}{}", recipient, body, Utc::now().to_rfc3339());
        let hash = Sha256::digest(input.as_bytes());
        Ok(format!("msg-{}", hex::encode(&hash[..6])))
    }
}

#[cfg(test)]
#[path = "outreach_tests.rs"]
mod tests;
