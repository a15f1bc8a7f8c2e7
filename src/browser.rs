// Copyright 2026 Ferret Contributors
// SPDX-License-Identifier: Apache-2.0

//! Navigation facade: one mutable browsing session over the fetch stack.
//!
//! A [`Browser`] owns the current page (URL + last body), an unfiltered
//! [`Fetcher`], and a [`ContentFilter`] around a clone of it. Whether GETs
//! route through the filter is decided once, at construction. The session
//! is long-lived, single-instance, and strictly sequential: every verb
//! performs at most one outbound request and returns when it completes or
//! fails. Construct it explicitly and hand it to the command layer; it is
//! not a global.
//!
//! POST is never filtered and carries no timeout: both asymmetries are
//! deliberate, inherited behavior.

use tracing::debug;

use crate::config::BrowserConfig;
use crate::error::BrowseResult;
use crate::fetch::http_client::{Fetcher, GetCapable};
use crate::fetch::template::RequestTemplate;
use crate::filter::ContentFilter;
use crate::page::Page;

/// Parameter key and value sent with the unconditional page-load GET that
/// `goto` performs.
const NOOP_PARAM: &str = "none";

/// A browsing session.
pub struct Browser {
    page: Page,
    fetcher: Fetcher,
    filter: ContentFilter<Fetcher>,
    child_protection: bool,
    timeout_ms: u64,
    home_url: String,
}

impl Browser {
    pub fn new(config: BrowserConfig) -> Self {
        let fetcher = Fetcher::new();
        let filter = ContentFilter::new(fetcher.clone(), &config.ban_list_path);
        Self {
            page: Page::new(&config.home_url),
            fetcher,
            filter,
            child_protection: config.child_protection,
            timeout_ms: config.timeout_ms,
            home_url: config.home_url,
        }
    }

    /// One-parameter GET against the current URL. Routed through the ban
    /// list filter iff protection is enabled. Stores the body; the current
    /// URL is unchanged.
    pub async fn get(&mut self, key: &str, value: &str) -> BrowseResult<()> {
        let template = RequestTemplate::new(self.page.url()).with_param(key, value);

        let body = if self.child_protection {
            self.filter.get_filtered(&template, self.timeout_ms).await?
        } else {
            self.fetcher.get(&template, self.timeout_ms).await?
        };
        self.page.set_html(body);
        Ok(())
    }

    /// One-parameter POST against the current URL. Never filtered, no
    /// timeout bound. Stores the rendered body; the current URL is
    /// unchanged.
    pub async fn post(&mut self, key: &str, value: &str) -> BrowseResult<()> {
        let template = RequestTemplate::new(self.page.url()).with_param(key, value);

        let body = self.fetcher.post(&template).await?;
        self.page.set_html(body);
        Ok(())
    }

    /// Search the current endpoint: `get("q", term)`.
    pub async fn search(&mut self, term: &str) -> BrowseResult<()> {
        self.get("q", term).await
    }

    /// Navigate: point the session at `url`, then load it with an
    /// unconditional no-op-parameter GET (same protection gating as
    /// [`Browser::get`]). The URL is updated before the fetch, so a failed
    /// load leaves the session pointing at the new target.
    pub async fn goto(&mut self, url: &str) -> BrowseResult<()> {
        debug!(from = %self.page.url(), to = %url, "navigate");
        self.page.set_url(url);
        self.get(NOOP_PARAM, NOOP_PARAM).await
    }

    /// Navigate back to the configured home endpoint.
    pub async fn home(&mut self) -> BrowseResult<()> {
        let home = self.home_url.clone();
        self.goto(&home).await
    }

    // Accessors never trigger a fetch.

    pub fn current_url(&self) -> &str {
        self.page.url()
    }

    /// Raw body of the last stored response.
    pub fn html(&self) -> &str {
        self.page.html()
    }

    /// Links on the current page, recomputed on every call.
    pub fn links(&self) -> Vec<String> {
        self.page.links()
    }

    /// Paragraph texts of the current page, recomputed on every call.
    pub fn paragraphs(&self) -> Vec<String> {
        self.page.paragraphs()
    }
}
