// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Server transport adapters

mod http;

pub use http::HttpTransport;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeTransport, TransportCall};

use async_trait::async_trait;
use lw_core::{FormData, Reply};
use thiserror::Error;

/// Failures that happen before a reply can be classified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("request failed: {0}")]
    Request(String),
    #[error("request timed out")]
    Timeout,
    #[error("HTTP {status}")]
    Status { status: u16 },
    #[error("malformed reply: {0}")]
    Decode(String),
}

/// Adapter for talking to the server
#[async_trait]
pub trait Transport: Clone + Send + Sync + 'static {
    /// POST form fields to `url` and decode the JSON reply.
    async fn send(&self, url: &str, payload: &FormData) -> Result<Reply, TransportError>;

    /// GET an HTML fragment from `url`.
    async fn get(&self, url: &str) -> Result<String, TransportError>;
}
