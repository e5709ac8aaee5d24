// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP transport using reqwest.
//!
//! Requests are form-encoded POSTs expecting a JSON reply, the same wire
//! format the page's AJAX forms use. Relative URLs resolve against the base
//! URL the page was loaded from.

use super::{Transport, TransportError};
use async_trait::async_trait;
use lw_core::{FormData, Reply};
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    base: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let base = Url::parse(base_url).map_err(|e| TransportError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        let client = Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolve `url` against the base URL.
    pub fn resolve(&self, url: &str) -> Result<Url, TransportError> {
        self.base.join(url).map_err(|e| TransportError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

fn request_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Request(e.to_string())
    }
}

fn check_status(response: &reqwest::Response) -> Result<(), TransportError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(TransportError::Status {
            status: status.as_u16(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, url: &str, payload: &FormData) -> Result<Reply, TransportError> {
        let url = self.resolve(url)?;
        let response = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .form(payload.pairs())
            .send()
            .await
            .map_err(request_error)?;
        check_status(&response)?;
        let body = response.bytes().await.map_err(request_error)?;
        Reply::from_slice(&body).map_err(|e| TransportError::Decode(e.to_string()))
    }

    async fn get(&self, url: &str) -> Result<String, TransportError> {
        let url = self.resolve(url)?;
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "text/html")
            .send()
            .await
            .map_err(request_error)?;
        check_status(&response)?;
        response.text().await.map_err(request_error)
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
