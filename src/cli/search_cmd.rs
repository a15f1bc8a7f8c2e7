//! `ferret search <term>` — search the engine and list result links.

use anyhow::{Context, Result};

use crate::browser::Browser;
use crate::cli::output::{self, Styled};
use crate::config::BrowserConfig;
use crate::filter::BLOCKED;

#[derive(serde::Serialize)]
struct LinkRow {
    index: usize,
    url: String,
}

/// Run the search command.
pub async fn run(config: BrowserConfig, term: &str) -> Result<()> {
    let mut browser = Browser::new(config);
    browser
        .search(term)
        .await
        .with_context(|| format!("search for '{term}' failed"))?;

    if browser.html() == BLOCKED {
        if output::is_json() {
            output::print_json(&serde_json::json!({
                "query": term,
                "blocked": true,
                "links": [],
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
        let rows: Vec<LinkRow> = links
            .iter()
            .enumerate()
            .map(|(index, url)| LinkRow {
                index,
                url: url.clone(),
            })
            .collect();
        output::print_json(&serde_json::json!({
            "query": term,
            "blocked": false,
            "links": rows,
        }));
        return Ok(());
    }

    if links.is_empty() {
        if !output::is_quiet() {
            eprintln!("  No result links found.");
        }
        return Ok(());
    }

    for (i, link) in links.iter().enumerate() {
        println!("[{i}] {link}");
    }
    Ok(())
}
