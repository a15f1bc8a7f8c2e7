// Copyright 2026 Ferret Contributors
// SPDX-License-Identifier: Apache-2.0

//! Page model: the last-fetched HTML plus link and paragraph extraction.
//!
//! Extraction walks the DOM with CSS selectors and never fails: malformed
//! HTML simply yields fewer or empty results. Nothing is cached: links
//! and paragraphs are recomputed from the stored body on every query, so
//! the same body always yields the same ordered sequence. Order matters:
//! callers address links by their 0-based position.
//!
//! Search-engine result pages wrap destinations in a redirect URL whose
//! `uddg=` query parameter carries the percent-encoded target, with a
//! trailing `&rut=...` tracking parameter appended. Link extraction undoes
//! both: it decodes the wrapped target and drops the tracking suffix.

use scraper::{Html, Selector};

/// Query-parameter marker the search engine uses to wrap destinations.
const REDIRECT_MARKER: &str = "uddg=";

/// Start of the tracking parameter appended to wrapped destinations.
const TRACKING_SUFFIX: &str = "&rut";

/// One browsing session's current page: URL plus last-fetched body.
///
/// Mutated only by the facade's fetch operations. A filtered fetch stores
/// the blocking sentinel as the body; a failed fetch propagates its error
/// and leaves the body unchanged.
#[derive(Debug, Clone, Default)]
pub struct Page {
    url: String,
    html: String,
}

impl Page {
    /// A page at `url` with an empty body (nothing fetched yet).
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: String::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn set_html(&mut self, html: impl Into<String>) {
        self.html = html.into();
    }

    /// All links on the page, in document order. See [`extract_links`].
    pub fn links(&self) -> Vec<String> {
        extract_links(&self.html)
    }

    /// All paragraph texts on the page, in document order.
    /// See [`extract_paragraphs`].
    pub fn paragraphs(&self) -> Vec<String> {
        extract_paragraphs(&self.html)
    }
}

/// Extract every anchor href from `html`, in document order.
///
/// Each href is unwrapped from the search engine's redirect (`uddg=`) and
/// stripped of the trailing tracking parameter (`&rut`), then pushed as-is:
/// no de-duplication, no validation, empty strings pass through. The output
/// is fully materialized, so indices into it are stable for a given body.
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let mut links = Vec::new();
    if let Ok(sel) = Selector::parse("a[href]") {
        for el in document.select(&sel) {
            if let Some(href) = el.value().attr("href") {
                links.push(clean_href(href));
            }
        }
    }
    links
}

/// Undo the redirect wrapper and tracking suffix on one href.
///
/// Everything after `uddg=` is treated as the percent-encoded destination
/// and decoded (UTF-8); if decoding fails the remainder passes through
/// undecoded. The result is then truncated at the first `&rut`. An href
/// without the marker is only truncated.
fn clean_href(href: &str) -> String {
    let unwrapped = match href.find(REDIRECT_MARKER) {
        Some(idx) => {
            let wrapped = &href[idx + REDIRECT_MARKER.len()..];
            match urlencoding::decode(wrapped) {
                Ok(decoded) => decoded.into_owned(),
                Err(_) => wrapped.to_string(),
            }
        }
        None => href.to_string(),
    };

    match unwrapped.find(TRACKING_SUFFIX) {
        Some(idx) => unwrapped[..idx].to_string(),
        None => unwrapped,
    }
}

/// Extract the inner text of every `<p>` element in `html`, in document
/// order. Tags are stripped and whitespace collapsed; no filtering, no
/// length limits.
pub fn extract_paragraphs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let mut paragraphs = Vec::new();
    if let Ok(sel) = Selector::parse("p") {
        for el in document.select(&sel) {
            paragraphs.push(element_text(&el));
        }
    }
    paragraphs
}

/// Collect all text content from an element, trimmed and whitespace-
/// collapsed.
fn element_text(el: &scraper::ElementRef<'_>) -> String {
    el.text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
