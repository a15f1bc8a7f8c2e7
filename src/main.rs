// Copyright 2026 Ferret Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use ferret::cli;
use ferret::config::BrowserConfig;

#[derive(Parser)]
#[command(
    name = "ferret",
    about = "Ferret — a filtered command-line pseudo-browser",
    version,
    after_help = "Run 'ferret <command> --help' for details on each command.\nRun 'ferret' with no command to enter interactive mode."
)]
struct Cli {
    /// Output results as JSON (machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Screen GET responses against the ban list
    #[arg(long, global = true)]
    protected: bool,

    /// Ban-list file: one regular expression per line
    #[arg(long, global = true)]
    ban_list: Option<PathBuf>,

    /// GET timeout in milliseconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Home/search endpoint URL
    #[arg(long, global = true)]
    home: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the engine and list result links by index
    Search {
        /// Term to search for
        term: String,
    },
    /// Load a URL and list the links found there
    Goto {
        /// URL to navigate to
        url: String,
    },
    /// Send a one-parameter GET against the home endpoint
    Get {
        key: String,
        value: String,
    },
    /// Send a one-parameter POST against the home endpoint
    Post {
        key: String,
        value: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global flags via environment variables so all modules can check them
    if cli.json {
        std::env::set_var("FERRET_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("FERRET_QUIET", "1");
    }
    if cli.no_color {
        std::env::set_var("FERRET_NO_COLOR", "1");
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cli.verbose { "ferret=debug" } else { "ferret=warn" }
                    .parse()
                    .unwrap(),
            ),
        )
        .init();

    // Flags override FERRET_* environment, which overrides defaults.
    let mut config = BrowserConfig::from_env();
    if cli.protected {
        config.child_protection = true;
    }
    if let Some(path) = cli.ban_list {
        config.ban_list_path = path;
    }
    if let Some(ms) = cli.timeout {
        config.timeout_ms = ms;
    }
    if let Some(home) = cli.home {
        config.home_url = home;
    }

    let result = match cli.command {
        // No subcommand → launch interactive session
        None => cli::repl::run(config).await,

        Some(Commands::Search { term }) => cli::search_cmd::run(config, &term).await,
        Some(Commands::Goto { url }) => cli::goto_cmd::run(config, &url).await,
        Some(Commands::Get { key, value }) => cli::request_cmd::run_get(config, &key, &value).await,
        Some(Commands::Post { key, value }) => {
            cli::request_cmd::run_post(config, &key, &value).await
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "ferret", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        if !cli::output::is_quiet() && !cli::output::is_json() {
            eprintln!("  Error: {e:#}");
        }
        if cli::output::is_json() {
            cli::output::print_json(&serde_json::json!({
                "error": true,
                "message": format!("{e:#}"),
            }));
        }
        std::process::exit(1);
    }

    result
}
