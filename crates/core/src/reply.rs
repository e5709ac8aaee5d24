// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decoded server reply bodies.
//!
//! Every AJAX endpoint answers with a JSON mapping of the form
//! `{"status": "success" | "fail" | "error" | "noauth", "message": ..., "content": ...}`.
//! `Reply` keeps the decoded value untouched; interpretation happens in
//! [`crate::outcome::classify`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A decoded reply body. Any JSON value is accepted; shape checks are the
/// classifier's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reply(pub Value);

impl Reply {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Decode a reply from a raw response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body).map(Self)
    }

    /// The `status` field, if present and a string.
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    /// The `message` field, if present and a string.
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    /// The `content` field, verbatim.
    pub fn content(&self) -> Option<&Value> {
        self.0.get("content")
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Reply {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
#[path = "reply_tests.rs"]
mod tests;
