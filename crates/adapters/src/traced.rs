// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::surface::PanelSurface;
use crate::transport::{Transport, TransportError};
use async_trait::async_trait;
use lw_core::{Direction, FormData, Reply, Size};
use tracing::Instrument;

/// Wrapper that adds tracing to any Transport
#[derive(Clone)]
pub struct TracedTransport<T> {
    inner: T,
}

impl<T> TracedTransport<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

#[async_trait]
impl<T: Transport> Transport for TracedTransport<T> {
    async fn send(&self, url: &str, payload: &FormData) -> Result<Reply, TransportError> {
        async {
            // Field values may hold passwords; only log the keys.
            let fields: Vec<&str> = payload.iter().map(|(k, _)| k).collect();
            tracing::debug!(?fields, "sending");
            let start = std::time::Instant::now();
            let result = self.inner.send(url, payload).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(reply) => tracing::info!(
                    status = reply.status().unwrap_or("<none>"),
                    elapsed_ms,
                    "reply received"
                ),
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "send failed"),
            }
            result
        }
        .instrument(tracing::info_span!("transport.send", url))
        .await
    }

    async fn get(&self, url: &str) -> Result<String, TransportError> {
        async {
            let start = std::time::Instant::now();
            let result = self.inner.get(url).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(html) => tracing::info!(bytes = html.len(), elapsed_ms, "fragment loaded"),
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "get failed"),
            }
            result
        }
        .instrument(tracing::info_span!("transport.get", url))
        .await
    }
}

/// Wrapper that adds tracing to any PanelSurface
#[derive(Clone)]
pub struct TracedPanelSurface<P> {
    inner: P,
    name: String,
}

impl<P> TracedPanelSurface<P> {
    pub fn new(name: impl Into<String>, inner: P) -> Self {
        Self {
            inner,
            name: name.into(),
        }
    }
}

#[async_trait]
impl<P: PanelSurface> PanelSurface for TracedPanelSurface<P> {
    fn measure(&self) -> Size {
        let size = self.inner.measure();
        tracing::trace!(panel = %self.name, width = size.width, height = size.height, "measured");
        size
    }

    fn move_to(&self, top: f64, left: f64) {
        tracing::debug!(panel = %self.name, top, left, "placed");
        self.inner.move_to(top, left);
    }

    async fn slide_in(&self, direction: Direction) {
        tracing::debug!(panel = %self.name, %direction, "reveal");
        self.inner.slide_in(direction).await;
    }

    async fn slide_out(&self, direction: Direction) {
        tracing::debug!(panel = %self.name, %direction, "conceal");
        self.inner.slide_out(direction).await;
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
