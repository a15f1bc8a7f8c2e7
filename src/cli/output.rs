//! Shared output helpers for CLI commands.
//!
//! Global flags are carried as environment variables (set once by the
//! binary) so every module can check them without threading state.

/// Suppress non-essential output?
pub fn is_quiet() -> bool {
    std::env::var("FERRET_QUIET").is_ok()
}

/// Machine-readable JSON output?
pub fn is_json() -> bool {
    std::env::var("FERRET_JSON").is_ok()
}

/// Print a JSON value to stdout, pretty-printed.
pub fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    );
}

/// ANSI-aware status symbols, degrading to plain text with
/// `FERRET_NO_COLOR`.
pub struct Styled {
    color: bool,
}

impl Styled {
    pub fn new() -> Self {
        Self {
            color: std::env::var("FERRET_NO_COLOR").is_err(),
        }
    }

    pub fn ok_sym(&self) -> &'static str {
        if self.color {
            "\x1b[32m\u{2713}\x1b[0m"
        } else {
            "ok"
        }
    }

    pub fn warn_sym(&self) -> &'static str {
        if self.color {
            "\x1b[33m!\x1b[0m"
        } else {
            "!"
        }
    }
}

impl Default for Styled {
    fn default() -> Self {
        Self::new()
    }
}
