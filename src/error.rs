//! Error types shared by the browsing core.

use std::path::PathBuf;

/// All errors the browsing core can surface.
///
/// A blocked response is NOT an error: a filtered GET that trips the ban
/// list succeeds and returns the blocking sentinel instead of real content
/// (see [`crate::filter::BLOCKED`]). Only transport and configuration
/// failures live here.
#[derive(thiserror::Error, Debug)]
pub enum BrowseError {
    /// Network or timeout failure from a fetch. Surfaced to the caller,
    /// never retried.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The ban list could not be read. A filtered request cannot proceed
    /// without it; there is no fallback.
    #[error("ban list unreadable at {path}: {source}")]
    BanListUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A ban-list line failed to compile as a regular expression. A list
    /// that cannot be evaluated must not let content through silently.
    #[error("invalid ban pattern '{pattern}': {source}")]
    InvalidBanPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type BrowseResult<T> = Result<T, BrowseError>;
