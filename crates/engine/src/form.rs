// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Intercepted form submission.
//!
//! A bound form never navigates: its fields are posted through the transport
//! and the classified outcome goes to the binding's handler, exactly once per
//! attempt that passes the guard.

use crate::error::SubmitError;
use crate::request;
use lw_adapters::{FormElement, Transport};
use lw_core::{FormData, Outcome, OutcomeKind};
use std::sync::Arc;

/// Receives the outcome of each submission
pub type OutcomeHandler = Arc<dyn Fn(Outcome) + Send + Sync>;

/// Client-side precondition checked before anything is sent
pub type Guard = Arc<dyn Fn(&FormData) -> Result<(), SubmitError> + Send + Sync>;

/// Guard rejecting submissions whose `name` field is missing or blank.
pub fn required_field(name: &str) -> Guard {
    let name = name.to_string();
    Arc::new(move |fields: &FormData| {
        if fields.is_blank(&name) {
            Err(SubmitError::Rejected {
                field: name.clone(),
            })
        } else {
            Ok(())
        }
    })
}

/// Binds forms to a transport
#[derive(Clone)]
pub struct AsyncFormController<T> {
    transport: T,
}

impl<T: Transport> AsyncFormController<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn bind<F: FormElement>(&self, form: F, handler: OutcomeHandler) -> FormBinding<F, T> {
        FormBinding {
            form,
            transport: self.transport.clone(),
            handler,
            guard: None,
        }
    }
}

/// One intercepted form
#[derive(Clone)]
pub struct FormBinding<F, T> {
    form: F,
    transport: T,
    handler: OutcomeHandler,
    guard: Option<Guard>,
}

impl<F: FormElement, T: Transport> FormBinding<F, T> {
    pub fn with_guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Submit the form's current fields.
    ///
    /// A guard rejection sends nothing and never reaches the handler; the
    /// caller gets the rejection instead.
    pub async fn submit(&self) -> Result<OutcomeKind, SubmitError> {
        let fields = self.form.fields();
        if let Some(guard) = &self.guard {
            if let Err(e) = guard(&fields) {
                tracing::debug!(action = %self.form.action(), error = %e, "submission rejected");
                return Err(e);
            }
        }
        Ok(self.send(fields).await)
    }

    /// Submit with `extra` merged over the form's fields (same keys are
    /// replaced). Used when script code triggers the submission, so the
    /// guard is not consulted and nothing blank-checks the values in
    /// `extra`; callers validate what they pass.
    pub async fn submit_programmatically(&self, extra: FormData) -> OutcomeKind {
        let mut fields = self.form.fields();
        fields.merge(extra);
        self.send(fields).await
    }

    async fn send(&self, fields: FormData) -> OutcomeKind {
        let action = self.form.action();
        let outcome = request::post(&self.transport, &action, &fields).await;
        let kind = outcome.kind();
        (self.handler)(outcome);
        kind
    }
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
