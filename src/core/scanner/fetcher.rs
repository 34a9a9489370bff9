// src/core/scanner/fetcher.rs

use crate::core::config::ScanConfig;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Transport failures. None of them is fatal to a scan; callers fold them into
/// the affected target's result.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("invalid URL '{url}'")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// The message followed by every underlying cause, joined with `: `.
    ///
    /// reqwest keeps the useful part (refused connection, timeout, DNS
    /// failure) several sources deep.
    pub fn with_causes(&self) -> String {
        let mut message = self.to_string();
        let mut cause = std::error::Error::source(self);
        while let Some(inner) = cause {
            message.push_str(": ");
            message.push_str(&inner.to_string());
            cause = inner.source();
        }
        message
    }
}

/// Thin wrapper over a shared `reqwest::Client`. Cloning is cheap and every
/// clone reuses the same connection pool.
///
/// Redirects follow reqwest's default policy. There are no retries.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(config: &ScanConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// Issues one GET and returns the full body as text.
    ///
    /// The status code is not inspected: error pages are scanned like any
    /// other page.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|source| FetchError::Request { url: url.to_string(), source })?;
        debug!(url, status = %response.status(), "Received HTTP response.");

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Body { url: url.to_string(), source })?;
        debug!(url, bytes = body.len(), "Read response body.");
        Ok(body)
    }
}
