// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the page runtime

use lw_adapters::TransportError;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a submission never reached the server
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("required field {field} is empty")]
    Rejected { field: String },
}

/// Errors loading page configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("transport setup failed: {0}")]
    Transport(#[from] TransportError),
}
