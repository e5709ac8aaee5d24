// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Animated transient panels.
//!
//! [`PanelMachine`] decides which animation runs next; this module runs them.
//! Animations execute on a spawned driver task so a caller dropping its
//! `show`/`hide` future never strands the panel mid-transition.

use lw_adapters::PanelSurface;
use lw_core::{place, Direction, PanelMachine, PanelRequest, PanelState, PanelStep, Point, Viewport};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;

struct PanelShared {
    machine: PanelMachine,
    /// Viewport of the most recent show request
    viewport: Viewport,
}

struct PanelInner<P> {
    name: String,
    surface: P,
    spacing: f64,
    shared: Mutex<PanelShared>,
    /// `true` while no animation is running or queued
    idle: watch::Sender<bool>,
}

/// Handle to one panel. Clones drive the same panel.
pub struct Panel<P> {
    inner: Arc<PanelInner<P>>,
}

impl<P> Clone for Panel<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: PanelSurface> Panel<P> {
    pub fn new(name: impl Into<String>, surface: P, spacing: f64) -> Self {
        let (idle, _) = watch::channel(true);
        Self {
            inner: Arc::new(PanelInner {
                name: name.into(),
                surface,
                spacing,
                shared: Mutex::new(PanelShared {
                    machine: PanelMachine::new(),
                    viewport: Viewport::default(),
                }),
                idle,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn state(&self) -> PanelState {
        self.inner.shared.lock().machine.state()
    }

    /// Direction chosen at the most recent reveal.
    pub fn direction(&self) -> Direction {
        self.inner.shared.lock().machine.direction()
    }

    /// Show the panel next to `anchor`. Resolves once the animations this
    /// request started or joined have finished; a no-op on a visible panel.
    pub async fn show(&self, anchor: Point, viewport: Viewport) {
        self.request(PanelRequest::Show(anchor), Some(viewport)).await;
    }

    /// Hide the panel, sliding out the way it came in.
    pub async fn hide(&self) {
        self.request(PanelRequest::Hide, None).await;
    }

    async fn request(&self, request: PanelRequest, viewport: Option<Viewport>) {
        let mut idle = {
            let mut shared = self.inner.shared.lock();
            if let Some(viewport) = viewport {
                shared.viewport = viewport;
            }
            let animating = shared.machine.state().is_animating();
            match shared.machine.request(request) {
                Some(step) => {
                    self.inner.idle.send_replace(false);
                    tokio::spawn(Self::drive(Arc::clone(&self.inner), step));
                }
                None if animating => {
                    tracing::debug!(panel = %self.inner.name, ?request, "panel busy, request queued");
                }
                None => return,
            }
            self.inner.idle.subscribe()
        };
        // The sender lives in `inner`, which we hold; a closed channel can't
        // happen while `self` is alive.
        let _ = idle.wait_for(|idle| *idle).await;
    }

    async fn drive(inner: Arc<PanelInner<P>>, first: PanelStep) {
        let mut step = first;
        loop {
            match step {
                PanelStep::Reveal { anchor } => {
                    let size = inner.surface.measure();
                    let viewport = inner.shared.lock().viewport;
                    let placement = place(anchor, size, viewport, inner.spacing);
                    inner.surface.move_to(placement.top, placement.left);
                    inner.shared.lock().machine.placed(placement.direction);
                    inner.surface.slide_in(placement.direction).await;
                }
                PanelStep::Conceal { direction } => {
                    inner.surface.slide_out(direction).await;
                }
            }
            let mut shared = inner.shared.lock();
            match shared.machine.animation_done() {
                Some(next) => step = next,
                None => {
                    // Under the lock, so a request that starts a new driver
                    // right after this can't be marked idle by us.
                    inner.idle.send_replace(true);
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "panel_tests.rs"]
mod tests;
