// Copyright 2026 Ferret Contributors
// SPDX-License-Identifier: Apache-2.0

//! Ban-list content filter: a decorator over any GET-capable fetcher.
//!
//! The filter wraps a [`GetCapable`] by delegation (composition, not
//! inheritance), so the unfiltered fetcher stays independently usable and
//! testable. On every filtered call the ban list is re-read from disk
//! (there is no cache and therefore no invalidation problem), the inner
//! GET executes, and the response body is scanned against each pattern in
//! file order. The first match wins: scanning stops, a diagnostic is
//! logged, and the fixed [`BLOCKED`] sentinel is returned in place of the
//! real content. A blocked response is a successful call with a policy
//! outcome, not a failure.

use std::path::PathBuf;

use regex::Regex;
use tracing::warn;

use crate::error::{BrowseError, BrowseResult};
use crate::fetch::http_client::GetCapable;
use crate::fetch::template::RequestTemplate;

/// Fixed body returned in place of real content when a ban pattern
/// matches.
pub const BLOCKED: &str = "ERROR";

/// GET decorator that screens response bodies against a ban list.
pub struct ContentFilter<F: GetCapable> {
    inner: F,
    ban_list_path: PathBuf,
}

impl<F: GetCapable> ContentFilter<F> {
    pub fn new(inner: F, ban_list_path: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            ban_list_path: ban_list_path.into(),
        }
    }

    /// Execute a filtered GET.
    ///
    /// Loads the ban list first: a missing or unreadable list is a hard
    /// failure before any network traffic. Then delegates to the inner
    /// fetcher and scans the body. Returns the body unchanged when no
    /// pattern matches, or [`BLOCKED`] on the first match.
    pub async fn get_filtered(
        &self,
        template: &RequestTemplate,
        timeout_ms: u64,
    ) -> BrowseResult<String> {
        let patterns = self.load_ban_list()?;
        let body = self.inner.get(template, timeout_ms).await?;

        for pattern in &patterns {
            let re = Regex::new(pattern).map_err(|source| BrowseError::InvalidBanPattern {
                pattern: pattern.clone(),
                source,
            })?;
            if re.is_match(&body) {
                warn!(pattern = %pattern, url = %template.url(), "response matched ban list, blocking");
                return Ok(BLOCKED.to_string());
            }
        }
        Ok(body)
    }

    /// Read the ban list fresh from disk: one regex pattern per non-empty
    /// line, file order preserved.
    fn load_ban_list(&self) -> BrowseResult<Vec<String>> {
        let raw = std::fs::read_to_string(&self.ban_list_path).map_err(|source| {
            BrowseError::BanListUnavailable {
                path: self.ban_list_path.clone(),
                source,
            }
        })?;

        Ok(raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    /// Fetcher stub returning a canned body and counting calls.
    struct FixedFetcher {
        body: String,
        calls: AtomicUsize,
    }

    impl FixedFetcher {
        fn new(body: &str) -> Self {
            Self {
                body: body.to_string(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl GetCapable for &FixedFetcher {
        async fn get(&self, _template: &RequestTemplate, _timeout_ms: u64) -> BrowseResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.body.clone())
        }
    }

    fn ban_list_file(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp ban list");
        for line in lines {
            writeln!(file, "{line}").expect("write ban list line");
        }
        file
    }

    fn template() -> RequestTemplate {
        RequestTemplate::new("https://example.com")
    }

    #[tokio::test]
    async fn test_first_match_blocks_and_short_circuits() {
        let list = ban_list_file(&["nomatch", "casino", "[invalid"]);
        let fetcher = FixedFetcher::new("an online casino advert");
        let filter = ContentFilter::new(&fetcher, list.path());

        // Pattern #2 matches, so the invalid pattern #3 is never compiled.
        let body = filter.get_filtered(&template(), 1000).await.unwrap();
        assert_eq!(body, BLOCKED);

        // Same inputs, same outcome.
        let again = filter.get_filtered(&template(), 1000).await.unwrap();
        assert_eq!(again, BLOCKED);
    }

    #[tokio::test]
    async fn test_clean_body_passes_through_unchanged() {
        let list = ban_list_file(&["casino", "poker"]);
        let fetcher = FixedFetcher::new("a perfectly harmless page");
        let filter = ContentFilter::new(&fetcher, list.path());

        let body = filter.get_filtered(&template(), 1000).await.unwrap();
        assert_eq!(body, "a perfectly harmless page");
    }

    #[tokio::test]
    async fn test_patterns_are_regular_expressions() {
        let list = ban_list_file(&[r"b[ae]d\s+words"]);
        let fetcher = FixedFetcher::new("some bad  words here");
        let filter = ContentFilter::new(&fetcher, list.path());

        let body = filter.get_filtered(&template(), 1000).await.unwrap();
        assert_eq!(body, BLOCKED);
    }

    #[tokio::test]
    async fn test_missing_ban_list_fails_before_fetching() {
        let fetcher = FixedFetcher::new("never seen");
        let filter = ContentFilter::new(&fetcher, "/nonexistent/banlist.txt");

        let err = filter.get_filtered(&template(), 1000).await.unwrap_err();
        assert!(matches!(err, BrowseError::BanListUnavailable { .. }));
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_invalid_pattern_is_a_configuration_error() {
        let list = ban_list_file(&["[unclosed"]);
        let fetcher = FixedFetcher::new("anything");
        let filter = ContentFilter::new(&fetcher, list.path());

        let err = filter.get_filtered(&template(), 1000).await.unwrap_err();
        assert!(matches!(err, BrowseError::InvalidBanPattern { .. }));
    }

    #[tokio::test]
    async fn test_blank_lines_are_skipped() {
        // A blank line must not become a match-everything pattern.
        let list = ban_list_file(&["", "   ", "casino", ""]);
        let fetcher = FixedFetcher::new("harmless");
        let filter = ContentFilter::new(&fetcher, list.path());

        let body = filter.get_filtered(&template(), 1000).await.unwrap();
        assert_eq!(body, "harmless");
    }
}
