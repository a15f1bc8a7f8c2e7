//! `ferret get <key> <value>` and `ferret post <key> <value>` — one-shot
//! custom requests against the home endpoint, body to stdout.

use anyhow::{Context, Result};

use crate::browser::Browser;
use crate::cli::output::{self, Styled};
use crate::config::BrowserConfig;
use crate::filter::BLOCKED;

/// Run a one-parameter GET against the home endpoint.
pub async fn run_get(config: BrowserConfig, key: &str, value: &str) -> Result<()> {
    let mut browser = Browser::new(config);
    browser
        .get(key, value)
        .await
        .with_context(|| format!("GET with {key}={value} failed"))?;
    emit(&browser)
}

/// Run a one-parameter POST against the home endpoint.
pub async fn run_post(config: BrowserConfig, key: &str, value: &str) -> Result<()> {
    let mut browser = Browser::new(config);
    browser
        .post(key, value)
        .await
        .with_context(|| format!("POST with {key}={value} failed"))?;
    emit(&browser)
}

fn emit(browser: &Browser) -> Result<()> {
    if browser.html() == BLOCKED {
        if output::is_json() {
            output::print_json(&serde_json::json!({
                "url": browser.current_url(),
                "blocked": true,
            }));
        } else if !output::is_quiet() {
            eprintln!(
                "  {} Response blocked by the ban list.",
                Styled::new().warn_sym()
            );
        }
        return Ok(());
    }

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "url": browser.current_url(),
            "blocked": false,
            "body": browser.html(),
        }));
        return Ok(());
    }

    println!("{}", browser.html());
    Ok(())
}
