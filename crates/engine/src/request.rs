// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Send → classify: the one path every request's result travels.

use lw_adapters::{Transport, TransportError};
use lw_core::{classify, FormData, Outcome, Reply};

/// Classify a transport result. Transport failures short-circuit to
/// [`Outcome::Transport`] without looking at any status.
pub fn classify_result(result: Result<Reply, TransportError>) -> Outcome {
    match result {
        Ok(reply) => classify(Some(&reply)),
        Err(e) => Outcome::transport(e),
    }
}

/// POST `payload` to `url` and classify the result.
pub async fn post<T: Transport>(transport: &T, url: &str, payload: &FormData) -> Outcome {
    let outcome = classify_result(transport.send(url, payload).await);
    tracing::debug!(url, kind = %outcome.kind(), "classified reply");
    outcome
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
