//! CLI subcommand implementations for the ferret binary.

pub mod goto_cmd;
pub mod output;
pub mod repl;
pub mod request_cmd;
pub mod search_cmd;
