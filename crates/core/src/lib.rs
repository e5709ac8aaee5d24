// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! lw-core: pure data and algorithms for the lcmweb page runtime

pub mod form_data;
pub mod notice;
pub mod outcome;
pub mod panel;
pub mod placement;
pub mod reply;
pub mod template;
pub mod timer;

pub use form_data::FormData;
pub use notice::Notice;
pub use outcome::{classify, classify_bytes, Outcome, OutcomeKind};
pub use panel::{PanelMachine, PanelRequest, PanelState, PanelStep};
pub use placement::{place, Direction, Placement, Point, Size, Viewport, DEFAULT_SPACING};
pub use reply::Reply;
pub use template::{escape_html, Template};
pub use timer::TimerId;
