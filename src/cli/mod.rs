// src/cli/mod.rs
use clap::Parser;

use crate::core::config::parse_api_url;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate passwords and check them against known breaches", long_about = None)]
pub struct Args {
    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Breach range API base URL (overrides BREACH_API_URL)
    #[arg(long, global = true, value_parser = parse_api_url)]
    pub api_url: Option<String>,
}
