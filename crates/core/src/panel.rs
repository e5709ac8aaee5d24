// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reveal/conceal state machine for transient panels.
//!
//! `Hidden -> Revealing -> Visible -> Concealing -> Hidden`. Animations are
//! never interrupted: a request arriving mid-animation is parked (queue depth
//! one, latest request wins) and started when the running animation reports
//! completion.

use crate::placement::{Direction, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    #[default]
    Hidden,
    Revealing,
    Visible,
    Concealing,
}

impl PanelState {
    pub fn is_animating(&self) -> bool {
        matches!(self, PanelState::Revealing | PanelState::Concealing)
    }
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelState::Hidden => write!(f, "hidden"),
            PanelState::Revealing => write!(f, "revealing"),
            PanelState::Visible => write!(f, "visible"),
            PanelState::Concealing => write!(f, "concealing"),
        }
    }
}

/// Caller intent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelRequest {
    /// Show the panel anchored at a pointer position.
    Show(Point),
    Hide,
}

/// Animation the caller must start now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelStep {
    /// Measure, place relative to `anchor`, record the direction with
    /// [`PanelMachine::placed`], then slide in.
    Reveal { anchor: Point },
    /// Slide out toward the edge the panel was revealed from.
    Conceal { direction: Direction },
}

/// Pure panel transition logic; the engine owns the actual animations.
#[derive(Debug, Clone, Default)]
pub struct PanelMachine {
    state: PanelState,
    pending: Option<PanelRequest>,
    direction: Direction,
}

impl PanelMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Direction computed at the most recent reveal.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending(&self) -> Option<PanelRequest> {
        self.pending
    }

    /// Record the direction chosen by placement for the reveal in flight.
    pub fn placed(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Apply a caller request. Returns the animation to start, if any.
    pub fn request(&mut self, request: PanelRequest) -> Option<PanelStep> {
        match (self.state, request) {
            (PanelState::Hidden, PanelRequest::Show(anchor)) => {
                self.state = PanelState::Revealing;
                Some(PanelStep::Reveal { anchor })
            }
            (PanelState::Visible, PanelRequest::Hide) => {
                self.state = PanelState::Concealing;
                Some(PanelStep::Conceal {
                    direction: self.direction,
                })
            }
            // Mid-animation: park the request unless it matches where the
            // animation is already heading.
            (PanelState::Revealing, PanelRequest::Hide)
            | (PanelState::Concealing, PanelRequest::Show(_)) => {
                self.pending = Some(request);
                None
            }
            (PanelState::Revealing, PanelRequest::Show(_))
            | (PanelState::Concealing, PanelRequest::Hide) => {
                self.pending = None;
                None
            }
            // Already in the requested resting state.
            (PanelState::Visible, PanelRequest::Show(_))
            | (PanelState::Hidden, PanelRequest::Hide) => None,
        }
    }

    /// The running animation finished. Returns the parked follow-up, if any.
    pub fn animation_done(&mut self) -> Option<PanelStep> {
        match self.state {
            PanelState::Revealing => {
                self.state = PanelState::Visible;
                match self.pending.take() {
                    Some(PanelRequest::Hide) => self.request(PanelRequest::Hide),
                    _ => None,
                }
            }
            PanelState::Concealing => {
                self.state = PanelState::Hidden;
                match self.pending.take() {
                    Some(show @ PanelRequest::Show(_)) => self.request(show),
                    _ => None,
                }
            }
            PanelState::Hidden | PanelState::Visible => None,
        }
    }
}

#[cfg(test)]
#[path = "panel_tests.rs"]
mod tests;
