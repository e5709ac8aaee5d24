// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake transport for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{Transport, TransportError};
use async_trait::async_trait;
use lw_core::{FormData, Reply};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;

/// Recorded transport call
#[derive(Debug, Clone, PartialEq)]
pub enum TransportCall {
    Send { url: String, payload: FormData },
    Get { url: String },
}

impl TransportCall {
    pub fn url(&self) -> &str {
        match self {
            TransportCall::Send { url, .. } | TransportCall::Get { url } => url,
        }
    }
}

#[derive(Default)]
struct FakeTransportState {
    calls: Vec<TransportCall>,
    /// One-shot replies, consumed in order
    queued: HashMap<String, VecDeque<Result<Reply, TransportError>>>,
    /// Reply used once the queue for a URL is empty
    replies: HashMap<String, Result<Reply, TransportError>>,
    pages: HashMap<String, Result<String, TransportError>>,
    delays: HashMap<String, Duration>,
}

/// Fake transport for testing
#[derive(Clone, Default)]
pub struct FakeTransport {
    inner: Arc<Mutex<FakeTransportState>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to every `send` to `url` with `result`.
    pub fn set_reply(&self, url: &str, result: Result<Reply, TransportError>) {
        self.inner.lock().replies.insert(url.to_string(), result);
    }

    /// Reply to the next `send` to `url` with `result`, ahead of `set_reply`.
    pub fn push_reply(&self, url: &str, result: Result<Reply, TransportError>) {
        self.inner
            .lock()
            .queued
            .entry(url.to_string())
            .or_default()
            .push_back(result);
    }

    /// Answer `get` on `url` with `result`.
    pub fn set_page(&self, url: &str, result: Result<String, TransportError>) {
        self.inner.lock().pages.insert(url.to_string(), result);
    }

    /// Delay every call to `url` by `delay`.
    pub fn set_delay(&self, url: &str, delay: Duration) {
        self.inner.lock().delays.insert(url.to_string(), delay);
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<TransportCall> {
        self.inner.lock().calls.clone()
    }

    /// Payloads sent to `url`, in call order
    pub fn sent_to(&self, url: &str) -> Vec<FormData> {
        self.inner
            .lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                TransportCall::Send { url: u, payload } if u == url => Some(payload.clone()),
                _ => None,
            })
            .collect()
    }

    async fn delay(&self, url: &str) {
        let delay = self.inner.lock().delays.get(url).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, url: &str, payload: &FormData) -> Result<Reply, TransportError> {
        let result = {
            let mut state = self.inner.lock();
            state.calls.push(TransportCall::Send {
                url: url.to_string(),
                payload: payload.clone(),
            });
            let queued = state.queued.get_mut(url).and_then(VecDeque::pop_front);
            queued.or_else(|| state.replies.get(url).cloned())
        };
        self.delay(url).await;
        result.unwrap_or_else(|| Err(TransportError::Request(format!("no reply scripted for {url}"))))
    }

    async fn get(&self, url: &str) -> Result<String, TransportError> {
        let result = {
            let mut state = self.inner.lock();
            state.calls.push(TransportCall::Get {
                url: url.to_string(),
            });
            state.pages.get(url).cloned()
        };
        self.delay(url).await;
        result.unwrap_or(Err(TransportError::Status { status: 404 }))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
