//! `ferret goto <url>` — load a page and list the links found there.

use anyhow::{Context, Result};

use crate::browser::Browser;
use crate::cli::output::{self, Styled};
use crate::config::BrowserConfig;
use crate::filter::BLOCKED;

/// Run the goto command.
pub async fn run(config: BrowserConfig, url: &str) -> Result<()> {
    let mut browser = Browser::new(config);
    browser
        .goto(url)
        .await
        .with_context(|| format!("failed to load {url}"))?;

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

    let links = browser.links();

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "url": browser.current_url(),
            "blocked": false,
            "links": links,
        }));
        return Ok(());
    }

    if !output::is_quiet() {
        eprintln!(
            "  {} Loaded {} ({} bytes).",
            Styled::new().ok_sym(),
            browser.current_url(),
            browser.html().len()
        );
    }
    for (i, link) in links.iter().enumerate() {
        println!("[{i}] {link}");
    }
    Ok(())
}
