// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session keep-alive.
//!
//! Pings the no-op endpoint on a fixed period so the session cookie stays
//! fresh. Pings never wait on each other; a ping that comes back anything but
//! `success` is surfaced on the flash error channel and stays there until the
//! user dismisses it.

use crate::channel::Flash;
use crate::request;
use lw_adapters::{Surface, Transport};
use lw_core::{FormData, OutcomeKind, Template, TimerId};
use std::time::Duration;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{Instant, MissedTickBehavior};

/// tokio intervals reject a zero period.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

pub struct LivenessLoop<T, S> {
    transport: T,
    flash: Flash<S>,
    url: String,
}

impl<T: Clone, S> Clone for LivenessLoop<T, S> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            flash: self.flash.clone(),
            url: self.url.clone(),
        }
    }
}

impl<T: Transport, S: Surface> LivenessLoop<T, S> {
    pub fn new(transport: T, flash: Flash<S>, url: impl Into<String>) -> Self {
        Self {
            transport,
            flash,
            url: url.into(),
        }
    }

    /// Start ticking. The first ping goes out one `interval` from now.
    ///
    /// Returns `None` when called outside a tokio runtime.
    pub fn start(self, interval: Duration) -> Option<LivenessHandle> {
        let interval = interval.max(MIN_INTERVAL);
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(url = %self.url, "no runtime, liveness not started");
            return None;
        };
        tracing::info!(
            timer = %TimerId::liveness(),
            url = %self.url,
            interval_ms = interval.as_millis() as u64,
            "liveness started"
        );
        let task = runtime.spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut pings = JoinSet::new();
            loop {
                ticker.tick().await;
                // Reap finished pings
                while pings.try_join_next().is_some() {}
                let this = self.clone();
                pings.spawn(async move {
                    this.tick().await;
                });
            }
        });
        Some(LivenessHandle { task })
    }

    /// One ping. Failures go to the flash error channel; a success leaves
    /// whatever is showing alone.
    pub async fn tick(&self) -> OutcomeKind {
        let outcome = request::post(&self.transport, &self.url, &FormData::new()).await;
        let kind = outcome.kind();
        if !outcome.is_success() {
            tracing::warn!(url = %self.url, %kind, "liveness ping failed");
            self.flash.dispatch(&outcome, &Template::default());
        }
        kind
    }
}

/// Running liveness loop. Dropping the handle stops it.
pub struct LivenessHandle {
    task: JoinHandle<()>,
}

impl LivenessHandle {
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for LivenessHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
#[path = "liveness_tests.rs"]
mod tests;
