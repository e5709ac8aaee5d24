// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Positional message templates
//!
//! Templates use `{0}`, `{1}`, ... placeholders. Missing arguments leave the
//! placeholder untouched.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Regex pattern for `{N}` positional placeholders
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static ARG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\d+)\}").expect("constant regex pattern is valid"));

/// Escape a string for insertion into HTML text or attribute values.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Replace `{N}` placeholders with the N-th argument.
pub fn format_positional(template: &str, args: &[&str]) -> String {
    ARG_PATTERN
        .replace_all(template, |caps: &regex::Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| args.get(i))
                .map(|arg| arg.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Plain text form of a success payload: strings as-is, null as empty,
/// anything else as compact JSON.
pub fn payload_text(payload: &Value) -> String {
    match payload {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// HTML template for success notifications.
///
/// The payload is HTML-escaped before substitution; the template itself is
/// trusted markup supplied by the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pattern: String,
}

impl Template {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Render the template with the success payload as `{0}`.
    ///
    /// Array payloads spread across `{0}`, `{1}`, ...
    pub fn render(&self, payload: &Value) -> String {
        let args: Vec<String> = match payload {
            Value::Array(items) => items.iter().map(payload_text).collect(),
            other => vec![payload_text(other)],
        };
        let escaped: Vec<String> = args.iter().map(|a| escape_html(a)).collect();
        let refs: Vec<&str> = escaped.iter().map(String::as_str).collect();
        format_positional(&self.pattern, &refs)
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new("{0}")
    }
}

impl From<&str> for Template {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
