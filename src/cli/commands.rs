// src/cli/commands.rs
use clap::{Args, Subcommand};

use crate::models::CharsetConfig;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password and check it against known breaches
    Generate(GenerateOptions),

    /// Check an existing password against known breaches
    Check {
        /// Password to check. Prefer omitting it to get a hidden prompt, since
        /// arguments are visible in shell history and process listings
        password: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the HTTP API server
    Serve {
        /// Listen address
        #[arg(long)]
        address: Option<String>,

        /// Listen port
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct GenerateOptions {
    /// Password length (8-64)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out numbers
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Use rejection sampling for a strictly uniform distribution
    #[arg(long)]
    pub rejection_sampling: bool,

    /// Do not query the breach database
    #[arg(long)]
    pub skip_check: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateOptions {
    pub fn charset(&self) -> CharsetConfig {
        CharsetConfig {
            uppercase: !self.no_uppercase,
            lowercase: !self.no_lowercase,
            numbers: !self.no_numbers,
            symbols: !self.no_symbols,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::CommandFactory;

    #[test]
    fn check_help_recommends_the_prompt() {
        let command = Args::command();
        let check = command.find_subcommand("check").unwrap();
        let password = check.get_arguments().find(|arg| arg.get_id() == "password").unwrap();
        let help = password.get_help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("hidden prompt"), "help was {}", help);
    }
}
