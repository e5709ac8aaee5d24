// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timer identifier type for labelling scheduled timers.
//!
//! TimerId names a runtime timer (auto-dismiss of a notification channel,
//! the liveness tick) so its log lines can be correlated.

use std::fmt;

/// Log label for a timer instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimerId(String);

impl TimerId {
    /// Timer ID for the auto-dismiss of a notification channel.
    pub fn dismiss(channel: &str) -> Self {
        Self(format!("dismiss:{}", channel))
    }

    /// Timer ID for the session liveness tick.
    pub fn liveness() -> Self {
        Self("liveness".to_string())
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
