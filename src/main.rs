use anyhow::Context;
use clap::Parser;
use std::path::Path;
use std::sync::Arc;

mod api;
mod breach;
mod cli;
mod core;
mod crypto;
mod generators;
mod logging;
mod models;

use crate::breach::{BreachChecker, PwnedRangeClient};
use crate::cli::{Args, CliCommand};
use crate::cli::handlers;
use crate::core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let (mut config, warnings) = Config::load();
    if let Some(url) = &args.api_url {
        config.breach_api_url = url.clone();
    }

    logging::init(&config).context("failed to initialize logging")?;
    for warning in &warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    let source = PwnedRangeClient::from_config(&config).context("failed to build breach client")?;
    let checker = BreachChecker::new(Arc::new(source));

    match args.command {
        Some(CliCommand::Generate(opts)) => {
            match handlers::handle_generate(&opts, &config, &checker).await {
                Ok(outcome) => {
                    handlers::print_generation(&outcome, opts.json).map_err(|e| anyhow::anyhow!("{}", e))?;
                }
                Err(e) => {
                    eprintln!("❌ {}", e);
                    std::process::exit(2);
                }
            }
        }
        Some(CliCommand::Check { password, json }) => {
            let password = match password {
                Some(password) => {
                    eprintln!("⚠️  Passwords given as arguments can end up in shell history; omit it to be prompted");
                    password
                }
                None => inquire::Password::new("Password to check:")
                    .with_display_mode(inquire::PasswordDisplayMode::Hidden)
                    .without_confirmation()
                    .prompt()?,
            };

            if password.is_empty() {
                eprintln!("❌ Password must not be empty");
                std::process::exit(2);
            }

            let status = checker.check(&password).await;
            handlers::print_check(&password, &status, json).map_err(|e| anyhow::anyhow!("{}", e))?;

            if status.is_breached() {
                std::process::exit(1);
            }
        }
        Some(CliCommand::Serve { address, port }) => {
            let address = address.unwrap_or_else(|| config.web_address.clone());
            let port = port.unwrap_or(config.web_port);
            println!("🚀 API server starting on http://{}:{}", address, port);

            let state = api::AppState {
                checker,
                default_length: config.default_password_length,
                sampling: config.sampling,
            };
            api::start_server(state, &address, port).await.map_err(|e| {
                log::error!("API server failed: {}", e);
                e
            })?;
        }
        None => {
            cli::menu::run_cli_menu(&config, &checker).await.map_err(|e| {
                log::error!("CLI menu error: {}", e);
                anyhow::anyhow!("{}", e)
            })?;
        }
    }

    Ok(())
}
