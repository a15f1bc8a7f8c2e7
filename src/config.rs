//! Session configuration: defaults, environment overrides, ban-list
//! location.
//!
//! Precedence is CLI flag > `FERRET_*` environment variable > default.
//! The flags are applied by the binary on top of [`BrowserConfig::from_env`].

use std::path::PathBuf;

/// Default search endpoint, used as the home page and the `search` target.
pub const DEFAULT_HOME_URL: &str = "https://html.duckduckgo.com/html/";

/// Default GET timeout. POST has no timeout bound by design.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Everything a browsing session needs at construction time.
///
/// `child_protection` is fixed for the lifetime of the session; there is
/// no runtime toggle.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BrowserConfig {
    pub home_url: String,
    pub timeout_ms: u64,
    pub ban_list_path: PathBuf,
    pub child_protection: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            home_url: DEFAULT_HOME_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            ban_list_path: default_ban_list_path(),
            child_protection: false,
        }
    }
}

impl BrowserConfig {
    /// Defaults overridden by `FERRET_HOME`, `FERRET_TIMEOUT_MS`,
    /// `FERRET_BAN_LIST`, and `FERRET_PROTECTED`.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(home) = std::env::var("FERRET_HOME") {
            if !home.is_empty() {
                cfg.home_url = home;
            }
        }
        if let Ok(raw) = std::env::var("FERRET_TIMEOUT_MS") {
            if let Ok(ms) = raw.parse() {
                cfg.timeout_ms = ms;
            }
        }
        if let Ok(path) = std::env::var("FERRET_BAN_LIST") {
            if !path.is_empty() {
                cfg.ban_list_path = PathBuf::from(path);
            }
        }
        if let Ok(flag) = std::env::var("FERRET_PROTECTED") {
            cfg.child_protection = flag == "1" || flag.eq_ignore_ascii_case("true");
        }

        cfg
    }
}

/// `<config-dir>/ferret/banlist.txt`, falling back to the working
/// directory when no config directory exists.
pub fn default_ban_list_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("ferret").join("banlist.txt"))
        .unwrap_or_else(|| PathBuf::from("banlist.txt"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = BrowserConfig::default();
        assert_eq!(cfg.home_url, DEFAULT_HOME_URL);
        assert_eq!(cfg.timeout_ms, 10_000);
        assert!(!cfg.child_protection);
        assert!(cfg.ban_list_path.ends_with("banlist.txt"));
    }
}
