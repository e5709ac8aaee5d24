// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Page composition root.
//!
//! A [`Page`] owns every component a page script uses: the transport, the
//! flash pair, the inline form-error channel and the liveness loop. Nothing
//! is global; tearing the page down cancels every timer it started.

use crate::channel::{ChannelConfig, Flash, NotificationChannel};
use crate::config::PageConfig;
use crate::error::ConfigError;
use crate::form::{AsyncFormController, FormBinding, OutcomeHandler};
use crate::liveness::{LivenessHandle, LivenessLoop};
use crate::panel::Panel;
use crate::request;
use lw_adapters::{
    FormElement, HttpTransport, PanelSurface, Surface, TracedPanelSurface, TracedTransport,
    Transport,
};
use lw_core::{FormData, Notice, Outcome, Template};
use parking_lot::Mutex;
use std::sync::Arc;

/// Surfaces a page renders notifications into
#[derive(Clone)]
pub struct PageSurfaces<S> {
    pub flash_success: S,
    pub flash_error: S,
    pub form_error: S,
}

pub struct Page<T, S> {
    config: PageConfig,
    transport: T,
    flash: Flash<S>,
    form_errors: NotificationChannel<S>,
    liveness: Mutex<Option<LivenessHandle>>,
}

impl<S: Surface> Page<TracedTransport<HttpTransport>, S> {
    /// Build a page talking HTTP to `config.base_url`.
    pub fn connect(config: PageConfig, surfaces: PageSurfaces<S>) -> Result<Self, ConfigError> {
        let http = HttpTransport::new(&config.base_url, config.request_timeout())?;
        Ok(Self::new(config, TracedTransport::new(http), surfaces))
    }
}

impl<T: Transport, S: Surface> Page<T, S> {
    pub fn new(config: PageConfig, transport: T, surfaces: PageSurfaces<S>) -> Self {
        let flash = Flash::new(
            surfaces.flash_success,
            surfaces.flash_error,
            config.success_dismiss(),
        );
        let form_errors = NotificationChannel::new(ChannelConfig::form_error(), surfaces.form_error);
        Self {
            config,
            transport,
            flash,
            form_errors,
            liveness: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn flash(&self) -> &Flash<S> {
        &self.flash
    }

    pub fn form_errors(&self) -> &NotificationChannel<S> {
        &self.form_errors
    }

    pub fn controller(&self) -> AsyncFormController<T> {
        AsyncFormController::new(self.transport.clone())
    }

    pub fn bind_form<F: FormElement>(&self, form: F, handler: OutcomeHandler) -> FormBinding<F, T> {
        self.controller().bind(form, handler)
    }

    /// Handler for forms that report inline: a success goes to the flash
    /// (rendered with `template`) and clears the form error box, anything
    /// else replaces the form error.
    pub fn inline_handler(&self, template: Template) -> OutcomeHandler {
        let flash = self.flash.clone();
        let form_errors = self.form_errors.clone();
        Arc::new(move |outcome: Outcome| {
            if outcome.is_success() {
                flash.dispatch(&outcome, &template);
            }
            form_errors.dispatch(&outcome, &template);
        })
    }

    /// Handler that reports every outcome on the flash pair.
    pub fn flash_handler(&self, template: Template) -> OutcomeHandler {
        let flash = self.flash.clone();
        Arc::new(move |outcome: Outcome| {
            flash.dispatch(&outcome, &template);
        })
    }

    pub fn panel<P: PanelSurface>(
        &self,
        name: &str,
        surface: P,
    ) -> Panel<TracedPanelSurface<P>> {
        Panel::new(
            name,
            TracedPanelSurface::new(name, surface),
            self.config.panel_spacing,
        )
    }

    /// POST outside of any form binding.
    pub async fn post(&self, url: &str, payload: &FormData) -> Outcome {
        request::post(&self.transport, url, payload).await
    }

    /// Fetch an HTML fragment. A failure is shown on the flash error channel
    /// and yields `None`.
    pub async fn fetch_fragment(&self, url: &str) -> Option<String> {
        match self.transport.get(url).await {
            Ok(html) => Some(html),
            Err(e) => {
                tracing::warn!(url, error = %e, "fragment load failed");
                self.flash
                    .error_channel()
                    .show_notice(&Notice::fragment_failure(&e.to_string()));
                None
            }
        }
    }

    /// Start pinging `noop_path`. Returns `false` if already running or if
    /// there is no tokio runtime to run on.
    pub fn start_liveness(&self) -> bool {
        let mut liveness = self.liveness.lock();
        if liveness.as_ref().is_some_and(LivenessHandle::is_running) {
            return false;
        }
        let Some(handle) = LivenessLoop::new(
            self.transport.clone(),
            self.flash.clone(),
            self.config.noop_path.clone(),
        )
        .start(self.config.liveness_interval()) else {
            return false;
        };
        *liveness = Some(handle);
        true
    }

    pub fn liveness_running(&self) -> bool {
        self.liveness
            .lock()
            .as_ref()
            .is_some_and(LivenessHandle::is_running)
    }

    /// Stop liveness, cancel every dismiss timer and hide all channels.
    pub fn teardown(&self) {
        if let Some(handle) = self.liveness.lock().take() {
            handle.cancel();
        }
        self.flash.close();
        self.form_errors.close();
        tracing::debug!("page torn down");
    }
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
