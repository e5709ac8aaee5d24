// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the page runtime.
//!
//! Each accessor returns `None` when the variable is unset or unparsable so
//! the caller keeps its configured value.

use std::time::Duration;

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Liveness ping interval (`LW_LIVENESS_MS`).
pub fn liveness_interval() -> Option<Duration> {
    parse_duration_ms("LW_LIVENESS_MS")
}

/// Success notification auto-dismiss delay (`LW_SUCCESS_DISMISS_MS`).
pub fn success_dismiss() -> Option<Duration> {
    parse_duration_ms("LW_SUCCESS_DISMISS_MS")
}

/// Per-request timeout (`LW_REQUEST_TIMEOUT_MS`).
pub fn request_timeout() -> Option<Duration> {
    parse_duration_ms("LW_REQUEST_TIMEOUT_MS")
}

/// Server base URL (`LW_BASE_URL`).
pub fn base_url() -> Option<String> {
    std::env::var("LW_BASE_URL")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
