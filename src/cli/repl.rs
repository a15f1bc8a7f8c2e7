//! Interactive browsing REPL.
//!
//! Launched when `ferret` runs with no subcommand. Type `help` for
//! available commands, Tab for completion. Every verb maps 1:1 onto a
//! [`Browser`] operation or accessor; fetch errors are reported and the
//! session stays alive.

use rustyline::completion::{Completer, Pair};
use rustyline::config::CompletionType;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Config, Editor, Helper};

use crate::browser::Browser;
use crate::cli::output::Styled;
use crate::config::BrowserConfig;
use crate::filter::BLOCKED;

/// Available REPL commands.
const COMMANDS: &[(&str, &str)] = &[
    ("search", "Search the engine and list result links"),
    ("links", "List all links on the current page"),
    ("link", "Follow a link by its index"),
    ("content", "Show the page's paragraph text"),
    ("html", "Show the raw HTML of the current page"),
    ("goto", "Navigate directly to a URL"),
    ("home", "Navigate back to the home endpoint"),
    ("get", "Send a one-parameter GET request"),
    ("post", "Send a one-parameter POST request"),
    ("help", "Show available commands"),
    ("details", "Explain the session and each command"),
    ("exit", "Quit the browser (alias: q)"),
];

/// REPL helper for tab completion and hints.
struct FerretHelper;

impl Completer for FerretHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];

        if !input.contains(' ') {
            let matches: Vec<Pair> = COMMANDS
                .iter()
                .filter(|(cmd, _)| cmd.starts_with(input))
                .map(|(cmd, desc)| Pair {
                    display: format!("{cmd:<10} {desc}"),
                    replacement: format!("{cmd} "),
                })
                .collect();
            return Ok((0, matches));
        }

        Ok((pos, Vec::new()))
    }
}

impl Hinter for FerretHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() || line.is_empty() || line.contains(' ') {
            return None;
        }
        for (cmd, _) in COMMANDS {
            if cmd.starts_with(line) && *cmd != line {
                return Some(cmd[line.len()..].to_string());
            }
        }
        None
    }
}

impl Highlighter for FerretHelper {}
impl Validator for FerretHelper {}
impl Helper for FerretHelper {}

/// Run the interactive session.
pub async fn run(config: BrowserConfig) -> anyhow::Result<()> {
    eprintln!();
    eprintln!(
        "  \x1b[32m\u{25c9}\x1b[0m \x1b[1mferret v{}\x1b[0m \x1b[90m\u{2014} text-mode browsing\x1b[0m",
        env!("CARGO_PKG_VERSION")
    );
    if config.child_protection {
        eprintln!(
            "    Ban-list filtering is on ({}).",
            config.ban_list_path.display()
        );
    }
    eprintln!("    Type \x1b[36mhelp\x1b[0m for commands, \x1b[90mTab\x1b[0m to complete, \x1b[90mexit\x1b[0m to quit.");
    eprintln!();

    let rl_config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .completion_type(CompletionType::List)
        .completion_prompt_limit(20)
        .build();

    let mut rl: Editor<FerretHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(rl_config)?;
    rl.set_helper(Some(FerretHelper));

    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    let hist_path = std::path::PathBuf::from(&home).join(".ferret_history");
    if hist_path.exists() {
        let _ = rl.load_history(&hist_path);
    }

    let mut browser = Browser::new(config);
    let prompt = " \x1b[36mferret>\x1b[0m ";

    loop {
        eprintln!();
        eprintln!("  Current url: {}", browser.current_url());

        match rl.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let mut parts = line.splitn(2, ' ');
                let cmd = parts.next().unwrap_or("");
                let args = parts.next().unwrap_or("").trim();

                match cmd {
                    "exit" | "quit" | "q" => break,
                    "help" | "h" | "?" => cmd_help(),
                    "details" => cmd_details(),
                    "search" => cmd_search(&mut browser, args).await,
                    "links" => print_links(&browser),
                    "link" => cmd_link(&mut browser, args).await,
                    "content" => cmd_content(&browser),
                    "html" => println!("{}", browser.html()),
                    "home" => cmd_home(&mut browser).await,
                    "goto" => cmd_goto(&mut browser, args).await,
                    "get" => cmd_request(&mut browser, args, false).await,
                    "post" => cmd_request(&mut browser, args, true).await,
                    _ => {
                        eprintln!("  Unknown command '{cmd}'. Type 'help' for commands.");
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("  \x1b[90m(Ctrl+C)\x1b[0m Type \x1b[1mexit\x1b[0m to quit.");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("  Error: {err}");
                break;
            }
        }
    }

    let _ = rl.save_history(&hist_path);
    Ok(())
}

/// Print every link on the current page with its index.
fn print_links(browser: &Browser) {
    let links = browser.links();
    if links.is_empty() {
        eprintln!("  No links on the current page.");
        return;
    }
    for (i, link) in links.iter().enumerate() {
        println!("[{i}] {link}");
    }
}

/// Report a blocked body. Returns true when the stored body is the
/// blocking sentinel.
fn report_blocked(browser: &Browser) -> bool {
    if browser.html() == BLOCKED {
        eprintln!(
            "  {} Response blocked by the ban list.",
            Styled::new().warn_sym()
        );
        true
    } else {
        false
    }
}

async fn cmd_search(browser: &mut Browser, args: &str) {
    if args.is_empty() {
        eprintln!("  Usage: search <term>");
        return;
    }
    match browser.search(args).await {
        Ok(()) => {
            if !report_blocked(browser) {
                print_links(browser);
            }
        }
        Err(e) => eprintln!("  Error: {e}"),
    }
}

async fn cmd_link(browser: &mut Browser, args: &str) {
    let links = browser.links();
    if links.is_empty() {
        eprintln!("  No links on the current page.");
        return;
    }
    let index: usize = match args.parse() {
        Ok(i) => i,
        Err(_) => {
            eprintln!("  Usage: link <index>   (see 'links' for indices)");
            return;
        }
    };
    if index >= links.len() {
        eprintln!(
            "  No link with index {index}; the page has {} (0..{}).",
            links.len(),
            links.len() - 1
        );
        return;
    }

    let target = links[index].clone();
    match browser.goto(&target).await {
        Ok(()) => {
            report_blocked(browser);
        }
        Err(e) => eprintln!("  Error: {e}"),
    }
}

fn cmd_content(browser: &Browser) {
    let paragraphs = browser.paragraphs();
    if paragraphs.is_empty() {
        eprintln!("  No paragraph text on the current page.");
        return;
    }
    for paragraph in paragraphs {
        println!("{paragraph}");
    }
}

async fn cmd_home(browser: &mut Browser) {
    match browser.home().await {
        Ok(()) => {
            report_blocked(browser);
        }
        Err(e) => eprintln!("  Error: {e}"),
    }
}

async fn cmd_goto(browser: &mut Browser, args: &str) {
    if args.is_empty() {
        eprintln!("  Usage: goto <url>");
        return;
    }
    match browser.goto(args).await {
        Ok(()) => {
            report_blocked(browser);
        }
        Err(e) => eprintln!("  Error: {e}"),
    }
}

async fn cmd_request(browser: &mut Browser, args: &str, is_post: bool) {
    let verb = if is_post { "post" } else { "get" };
    let fields: Vec<&str> = args.split_whitespace().collect();
    if fields.len() != 2 {
        eprintln!("  Usage: {verb} <key> <value>");
        return;
    }

    let result = if is_post {
        browser.post(fields[0], fields[1]).await
    } else {
        browser.get(fields[0], fields[1]).await
    };
    match result {
        Ok(()) => {
            if !report_blocked(browser) {
                eprintln!(
                    "  Stored {} bytes. Use 'links', 'content', or 'html' to inspect.",
                    browser.html().len()
                );
            }
        }
        Err(e) => eprintln!("  Error: {e}"),
    }
}

fn cmd_help() {
    eprintln!();
    eprintln!("  Commands:");
    eprintln!();
    for (cmd, desc) in COMMANDS {
        eprintln!("    {cmd:<10} {desc}");
    }
    eprintln!();
    eprintln!("  Tip: Tab completion works for command names.");
    eprintln!();
}

fn cmd_details() {
    eprintln!();
    eprintln!("  ferret is a text-mode pseudo-browser. One session holds one");
    eprintln!("  current URL and the body of the last response; every verb");
    eprintln!("  performs at most one HTTP request and blocks until it finishes.");
    eprintln!();
    eprintln!("    search <term>     GET ?q=<term> against the current URL and");
    eprintln!("                      list the result links by index.");
    eprintln!("    links             Re-list the links of the current page.");
    eprintln!("    link <n>          Navigate to link number <n>.");
    eprintln!("    content           Print the page's paragraph text only.");
    eprintln!("    html              Print the raw HTML source.");
    eprintln!("    goto <url>        Navigate straight to <url>.");
    eprintln!("    home              Return to the configured home endpoint.");
    eprintln!("    get <k> <v>       GET with one custom query parameter.");
    eprintln!("    post <k> <v>      POST with one form field (never filtered,");
    eprintln!("                      no timeout).");
    eprintln!();
    eprintln!("  With --protected, GET responses are screened against the ban");
    eprintln!("  list (one regex per line); a match stores a blocked marker in");
    eprintln!("  place of the page. The list is re-read on every request.");
    eprintln!();
}
