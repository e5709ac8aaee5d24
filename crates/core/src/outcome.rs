// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome taxonomy and the reply classifier.
//!
//! Every completed request is reduced to exactly one [`Outcome`]. This is the
//! only place status strings are compared; handlers match on the enum.

use crate::reply::Reply;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Classified result of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// `status == "success"`. Carries `content`, falling back to `message`.
    Success { payload: Value },
    /// Expected, user-correctable business failure.
    Fail { message: String },
    /// Unexpected server-side fault.
    Error { message: String },
    /// Session no longer authenticated.
    NoAuth {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Reply missing, undecodable, or with an unrecognized status.
    Unknown,
    /// The request failed before a reply could be read.
    Transport { detail: String },
}

impl Outcome {
    pub fn transport(detail: impl fmt::Display) -> Self {
        Outcome::Transport {
            detail: detail.to_string(),
        }
    }

    pub fn kind(&self) -> OutcomeKind {
        OutcomeKind::from(self)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

/// Tag-only variant of [`Outcome`] (strips associated data).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Success,
    Fail,
    Error,
    NoAuth,
    Unknown,
    Transport,
}

impl From<&Outcome> for OutcomeKind {
    fn from(o: &Outcome) -> Self {
        match o {
            Outcome::Success { .. } => OutcomeKind::Success,
            Outcome::Fail { .. } => OutcomeKind::Fail,
            Outcome::Error { .. } => OutcomeKind::Error,
            Outcome::NoAuth { .. } => OutcomeKind::NoAuth,
            Outcome::Unknown => OutcomeKind::Unknown,
            Outcome::Transport { .. } => OutcomeKind::Transport,
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeKind::Success => write!(f, "success"),
            OutcomeKind::Fail => write!(f, "fail"),
            OutcomeKind::Error => write!(f, "error"),
            OutcomeKind::NoAuth => write!(f, "noauth"),
            OutcomeKind::Unknown => write!(f, "unknown"),
            OutcomeKind::Transport => write!(f, "transport"),
        }
    }
}

/// Classify a decoded reply.
///
/// `None` stands for "no reply at all" and yields [`Outcome::Unknown`].
/// Transport failures never reach this function; callers map them to
/// [`Outcome::Transport`] directly.
pub fn classify(raw: Option<&Reply>) -> Outcome {
    let Some(reply) = raw else {
        return Outcome::Unknown;
    };
    let message = || reply.message().unwrap_or_default().to_string();

    match reply.status() {
        Some("success") => {
            let payload = match reply.content() {
                Some(content) => content.clone(),
                None => reply
                    .message()
                    .map(|m| Value::String(m.to_string()))
                    .unwrap_or(Value::Null),
            };
            Outcome::Success { payload }
        }
        Some("fail") => Outcome::Fail { message: message() },
        Some("error") => Outcome::Error { message: message() },
        Some("noauth") => Outcome::NoAuth {
            message: reply.message().map(str::to_string),
        },
        _ => Outcome::Unknown,
    }
}

/// Classify a raw response body. Undecodable bodies are [`Outcome::Unknown`].
pub fn classify_bytes(body: &[u8]) -> Outcome {
    match Reply::from_slice(body) {
        Ok(reply) => classify(Some(&reply)),
        Err(_) => Outcome::Unknown,
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
