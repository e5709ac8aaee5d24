// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification channels.
//!
//! A channel owns one [`Surface`] and decides when it is revealed, rewritten
//! or concealed. Auto-dismiss timers belong to the channel: every show bumps
//! a generation counter, a timer only acts on the generation it was armed
//! for, and `hide` or an overwrite aborts the timer task outright.

use lw_adapters::Surface;
use lw_core::{Notice, Outcome, OutcomeKind, Template, TimerId};
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::task::AbortHandle;

/// What a channel does with a show request while it is already visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowPolicy {
    /// Keep the visible message; the request is dropped.
    FirstWins,
    /// Replace the visible message.
    LastWins,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelConfig {
    pub name: String,
    pub policy: ShowPolicy,
    /// Dismiss delay for notices that ask for it; `None` keeps them up.
    pub auto_dismiss: Option<Duration>,
    /// A success dispatched to this channel hides it instead of showing.
    pub clear_on_success: bool,
}

impl ChannelConfig {
    pub fn flash_success(dismiss: Duration) -> Self {
        Self {
            name: "flash-success".to_string(),
            policy: ShowPolicy::FirstWins,
            auto_dismiss: Some(dismiss),
            clear_on_success: false,
        }
    }

    pub fn flash_error() -> Self {
        Self {
            name: "flash-error".to_string(),
            policy: ShowPolicy::LastWins,
            auto_dismiss: None,
            clear_on_success: false,
        }
    }

    pub fn form_error() -> Self {
        Self {
            name: "form-error".to_string(),
            policy: ShowPolicy::LastWins,
            auto_dismiss: None,
            clear_on_success: true,
        }
    }
}

/// Point-in-time view of a channel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChannelSnapshot {
    pub visible: bool,
    pub message: String,
    pub kind: Option<OutcomeKind>,
    pub timer_pending: bool,
}

#[derive(Default)]
struct ChannelState {
    visible: bool,
    message: String,
    kind: Option<OutcomeKind>,
    timer: Option<AbortHandle>,
    generation: u64,
}

impl ChannelState {
    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

struct ChannelInner<S> {
    config: ChannelConfig,
    surface: S,
    state: Mutex<ChannelState>,
}

impl<S> Drop for ChannelInner<S> {
    fn drop(&mut self) {
        self.state.get_mut().cancel_timer();
    }
}

impl<S: Surface> ChannelInner<S> {
    /// Apply a show under the lock. Returns the new generation, or `None`
    /// when the policy dropped the request.
    fn show_locked(
        &self,
        state: &mut ChannelState,
        message: &str,
        kind: OutcomeKind,
    ) -> Option<u64> {
        if state.visible && self.config.policy == ShowPolicy::FirstWins {
            tracing::debug!(channel = %self.config.name, %kind, "channel busy, show dropped");
            return None;
        }
        state.cancel_timer();
        state.generation += 1;
        self.surface.set_html(message);
        if !state.visible {
            self.surface.reveal();
        }
        state.visible = true;
        state.message = message.to_string();
        state.kind = Some(kind);
        tracing::debug!(channel = %self.config.name, %kind, "channel shown");
        Some(state.generation)
    }

    fn hide_locked(&self, state: &mut ChannelState) {
        state.cancel_timer();
        state.generation += 1;
        if state.visible {
            self.surface.conceal();
            tracing::debug!(channel = %self.config.name, "channel hidden");
        }
        state.visible = false;
        state.message.clear();
        state.kind = None;
    }

    fn expire(&self, generation: u64) {
        let mut state = self.state.lock();
        if state.generation != generation {
            return;
        }
        state.timer = None;
        self.hide_locked(&mut state);
    }
}

/// Handle to one notification channel. Clones share the same channel.
pub struct NotificationChannel<S> {
    inner: Arc<ChannelInner<S>>,
}

impl<S> Clone for NotificationChannel<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Surface> NotificationChannel<S> {
    pub fn new(config: ChannelConfig, surface: S) -> Self {
        Self {
            inner: Arc::new(ChannelInner {
                config,
                surface,
                state: Mutex::new(ChannelState::default()),
            }),
        }
    }

    pub fn config(&self) -> &ChannelConfig {
        &self.inner.config
    }

    /// Show `message` subject to the channel policy. Returns whether the
    /// surface now carries it.
    pub fn show(&self, message: &str, kind: OutcomeKind) -> bool {
        let mut state = self.inner.state.lock();
        self.inner.show_locked(&mut state, message, kind).is_some()
    }

    /// [`show`](Self::show) plus a dismiss timer. A dropped show arms nothing.
    pub fn show_timed(&self, message: &str, kind: OutcomeKind, after: Duration) -> bool {
        let mut state = self.inner.state.lock();
        let Some(generation) = self.inner.show_locked(&mut state, message, kind) else {
            return false;
        };
        state.timer = self.arm(generation, after);
        true
    }

    fn arm(&self, generation: u64, after: Duration) -> Option<AbortHandle> {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(channel = %self.inner.config.name, "no runtime, dismiss timer skipped");
            return None;
        };
        let timer = TimerId::dismiss(&self.inner.config.name);
        tracing::trace!(%timer, generation, after_ms = after.as_millis() as u64, "timer armed");
        let weak: Weak<ChannelInner<S>> = Arc::downgrade(&self.inner);
        let task = runtime.spawn(async move {
            tokio::time::sleep(after).await;
            if let Some(inner) = weak.upgrade() {
                tracing::trace!(%timer, generation, "timer fired");
                inner.expire(generation);
            }
        });
        Some(task.abort_handle())
    }

    /// Cancel any pending timer, conceal and clear.
    pub fn hide(&self) {
        let mut state = self.inner.state.lock();
        self.inner.hide_locked(&mut state);
    }

    /// The dismiss link.
    pub fn dismiss(&self) {
        self.hide();
    }

    /// Wrap a plain message in a paragraph and show it. On a last-wins
    /// channel this always replaces what is visible.
    pub fn set_error(&self, message: &str) -> bool {
        self.show_notice(&Notice::message(OutcomeKind::Fail, message))
    }

    pub fn show_notice(&self, notice: &Notice) -> bool {
        match self.inner.config.auto_dismiss {
            Some(after) if notice.auto_dismiss => self.show_timed(&notice.html, notice.kind, after),
            _ => self.show(&notice.html, notice.kind),
        }
    }

    /// Render and show an outcome. Never fails.
    pub fn dispatch(&self, outcome: &Outcome, template: &Template) -> bool {
        if outcome.is_success() && self.inner.config.clear_on_success {
            self.hide();
            return false;
        }
        self.show_notice(&Notice::render(outcome, template))
    }

    pub fn snapshot(&self) -> ChannelSnapshot {
        let state = self.inner.state.lock();
        ChannelSnapshot {
            visible: state.visible,
            message: state.message.clone(),
            kind: state.kind,
            timer_pending: state.timer.as_ref().is_some_and(|t| !t.is_finished()),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.inner.state.lock().visible
    }

    /// Teardown: hide and disarm.
    pub fn close(&self) {
        self.hide();
    }
}

/// The page's flash pair: a first-wins, self-dismissing success channel and a
/// persistent last-wins error channel.
pub struct Flash<S> {
    success: NotificationChannel<S>,
    error: NotificationChannel<S>,
}

impl<S> Clone for Flash<S> {
    fn clone(&self) -> Self {
        Self {
            success: self.success.clone(),
            error: self.error.clone(),
        }
    }
}

impl<S: Surface> Flash<S> {
    pub fn new(success_surface: S, error_surface: S, dismiss: Duration) -> Self {
        Self {
            success: NotificationChannel::new(ChannelConfig::flash_success(dismiss), success_surface),
            error: NotificationChannel::new(ChannelConfig::flash_error(), error_surface),
        }
    }

    /// Successes go to the success channel, everything else to the error one.
    pub fn dispatch(&self, outcome: &Outcome, template: &Template) -> bool {
        if outcome.is_success() {
            self.success.dispatch(outcome, template)
        } else {
            self.error.dispatch(outcome, template)
        }
    }

    /// Show success markup with the channel's dismiss timer.
    pub fn success(&self, html: &str) -> bool {
        self.success.show_notice(&Notice {
            kind: OutcomeKind::Success,
            html: html.to_string(),
            auto_dismiss: true,
            offers_reload: false,
        })
    }

    pub fn error(&self, html: &str) -> bool {
        self.error.show(html, OutcomeKind::Error)
    }

    pub fn hide_error(&self) {
        self.error.hide();
    }

    pub fn success_channel(&self) -> &NotificationChannel<S> {
        &self.success
    }

    pub fn error_channel(&self) -> &NotificationChannel<S> {
        &self.error
    }

    pub fn close(&self) {
        self.success.close();
        self.error.close();
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
