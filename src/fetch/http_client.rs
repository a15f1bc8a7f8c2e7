//! HTTP execution wrapping reqwest.
//!
//! Not a browser engine — just HTTP requests with a fixed identifying
//! user agent. One attempt per call: no retry, no backoff; failures
//! surface to the caller as [`crate::error::BrowseError::Transport`].
//!
//! GET and POST have deliberately distinct wire semantics: GET sends the
//! template's parameters as query parameters and honors a per-call
//! timeout, POST sends them as a url-encoded form body and rides the
//! transport's default timeout.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::BrowseResult;
use crate::fetch::template::RequestTemplate;

/// Fixed user agent sent with every request.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// A GET-capable fetch capability.
///
/// This is the seam the content filter decorates: it wraps any
/// `GetCapable` by delegation, so the unfiltered fetcher stays
/// independently usable.
#[async_trait]
pub trait GetCapable: Send + Sync {
    /// Execute one GET built from a clone of `template`, with the cloned
    /// parameters sent as query parameters. Returns the response body as
    /// text.
    async fn get(&self, template: &RequestTemplate, timeout_ms: u64) -> BrowseResult<String>;
}

/// HTTP client for the browsing session.
#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Create a new client with the fixed user agent.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();
        Self { client }
    }

    /// Execute one POST built from a clone of `template`, with the cloned
    /// parameters sent as a url-encoded form body. No explicit timeout;
    /// the transport default applies.
    ///
    /// The response surfaces as the re-serialized parsed document rather
    /// than the raw byte stream, so malformed markup comes back
    /// normalized.
    pub async fn post(&self, template: &RequestTemplate) -> BrowseResult<String> {
        let req = template.clone();
        debug!(url = %req.url(), params = req.params().len(), "POST");

        let response = self
            .client
            .post(req.url())
            .form(req.params())
            .send()
            .await?;
        let text = response.text().await?;
        Ok(scraper::Html::parse_document(&text).root_element().html())
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GetCapable for Fetcher {
    async fn get(&self, template: &RequestTemplate, timeout_ms: u64) -> BrowseResult<String> {
        let req = template.clone();
        debug!(url = %req.url(), params = req.params().len(), timeout_ms, "GET");

        let response = self
            .client
            .get(req.url())
            .query(req.params())
            .timeout(Duration::from_millis(timeout_ms))
            .send()
            .await?;
        Ok(response.text().await?)
    }
}
