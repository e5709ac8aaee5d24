// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering outcomes into notification markup.
//!
//! Server `message` fields are already HTML (escaped and markdown-formatted
//! server side) and are inserted verbatim. Client-side text such as transport
//! failure details is escaped here.

use crate::outcome::{Outcome, OutcomeKind};
use crate::template::{escape_html, Template};

pub const NOAUTH_PROMPT: &str = "<p>Your account is no longer authenticated. Please \
<a href=\"javascript:window.location.replace(window.location);\">try refreshing the page</a> \
and logging back in.</p>";
pub const ERROR_PREFACE: &str = "<p>An unexpected error has occurred.</p>";
pub const UNKNOWN_ERROR: &str = "<p>An unknown error occurred.</p>";

/// Rendered presentation of one outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: OutcomeKind,
    pub html: String,
    /// Success notices fade out on their own; everything else persists.
    pub auto_dismiss: bool,
    /// The markup carries a page-reload link.
    pub offers_reload: bool,
}

impl Notice {
    /// Render an outcome. `template` only applies to successes.
    pub fn render(outcome: &Outcome, template: &Template) -> Self {
        let kind = outcome.kind();
        let html = match outcome {
            Outcome::Success { payload } => template.render(payload),
            Outcome::Fail { message } => paragraph(message),
            Outcome::Error { message } => format!("{ERROR_PREFACE}{}", paragraph(message)),
            Outcome::NoAuth { message } => match message.as_deref() {
                Some(reason) if !reason.is_empty() => format!(
                    "{NOAUTH_PROMPT}<p>Could not authenticate because: {reason}</p>"
                ),
                _ => NOAUTH_PROMPT.to_string(),
            },
            Outcome::Unknown => UNKNOWN_ERROR.to_string(),
            Outcome::Transport { detail } => {
                format!("<p>Unknown error (bug): {}</p>", escape_html(detail))
            }
        };
        Self {
            kind,
            html,
            auto_dismiss: kind == OutcomeKind::Success,
            offers_reload: kind == OutcomeKind::NoAuth,
        }
    }

    /// A plain failure message wrapped in a paragraph.
    pub fn message(kind: OutcomeKind, message: &str) -> Self {
        Self {
            kind,
            html: paragraph(message),
            auto_dismiss: false,
            offers_reload: false,
        }
    }

    /// Failure to load an HTML fragment from the server.
    pub fn fragment_failure(detail: &str) -> Self {
        Self {
            kind: OutcomeKind::Transport,
            html: format!(
                "<p>Could not load HTML from server:</p>\n<p>{}</p>",
                escape_html(detail)
            ),
            auto_dismiss: false,
            offers_reload: false,
        }
    }
}

fn paragraph(message: &str) -> String {
    format!("<p>{message}</p>")
}

#[cfg(test)]
#[path = "notice_tests.rs"]
mod tests;
