// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Page runtime configuration.
//!
//! Loaded from TOML; every field has a default so an empty file is valid.
//! Environment variables (see [`crate::env`]) override file values.

use crate::env;
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// URL the page was loaded from; relative request URLs resolve against it
    pub base_url: String,
    /// Endpoint pinged by the liveness loop
    pub noop_path: String,
    pub liveness_interval_ms: u64,
    pub success_dismiss_ms: u64,
    /// Room kept between a panel and the viewport edge
    pub panel_spacing: f64,
    pub request_timeout_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/".to_string(),
            noop_path: "/noop".to_string(),
            liveness_interval_ms: 30_000,
            success_dismiss_ms: 5_000,
            panel_spacing: lw_core::DEFAULT_SPACING,
            request_timeout_ms: 10_000,
        }
    }
}

impl PageConfig {
    /// Load from a TOML file, then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_toml(&text)?.with_env_overrides())
    }

    /// Parse TOML without consulting the environment.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Some(url) = env::base_url() {
            self.base_url = url;
        }
        if let Some(d) = env::liveness_interval() {
            self.liveness_interval_ms = d.as_millis() as u64;
        }
        if let Some(d) = env::success_dismiss() {
            self.success_dismiss_ms = d.as_millis() as u64;
        }
        if let Some(d) = env::request_timeout() {
            self.request_timeout_ms = d.as_millis() as u64;
        }
        self
    }

    pub fn liveness_interval(&self) -> Duration {
        Duration::from_millis(self.liveness_interval_ms)
    }

    pub fn success_dismiss(&self) -> Duration {
        Duration::from_millis(self.success_dismiss_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
