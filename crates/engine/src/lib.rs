// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! lcmweb page runtime: notification channels, panels, async forms and the
//! session liveness loop

mod channel;
mod config;
pub mod env;
mod error;
mod form;
mod liveness;
pub mod logging;
mod page;
mod panel;
mod request;

pub use channel::{ChannelConfig, ChannelSnapshot, Flash, NotificationChannel, ShowPolicy};
pub use config::PageConfig;
pub use error::{ConfigError, SubmitError};
pub use form::{required_field, AsyncFormController, FormBinding, Guard, OutcomeHandler};
pub use liveness::{LivenessHandle, LivenessLoop};
pub use page::{Page, PageSurfaces};
pub use panel::Panel;
pub use request::{classify_result, post};
