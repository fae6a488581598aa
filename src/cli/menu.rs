// src/cli/menu.rs
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, Password, Select, Text};
use std::error::Error;

use crate::breach::{BreachChecker, StatusBoard};
use crate::cli::handlers::{print_check, print_generation, print_status, GenerationOutcome};
use crate::core::config::Config;
use crate::crypto;
use crate::generators::PasswordGenerator;
use crate::models::{CharsetConfig, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

const GENERATE: &str = "🔐  Generate secure password";
const CHECK: &str = "🔎  Check an existing password";
const EXIT: &str = "🚪  Exit";

// Everything the menu shows lives here, not in globals
struct MenuSession {
    board: StatusBoard,
    charset: CharsetConfig,
    length: usize,
}

pub async fn run_cli_menu(config: &Config, checker: &BreachChecker) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║          🦀 PASSCHECK                ║");
    println!("╚══════════════════════════════════════╝");

    let mut session = MenuSession {
        board: StatusBoard::new(),
        charset: CharsetConfig::default(),
        length: config.default_password_length,
    };

    loop {
        let choice = Select::new("What would you like to do?", vec![GENERATE, CHECK, EXIT]).prompt()?;

        match choice {
            GENERATE => generate(&mut session, config, checker).await?,
            CHECK => check(&mut session, checker).await?,
            _ => break,
        }

        let _ = Text::new("Press enter to continue...").prompt();
    }

    println!("👋 Goodbye!");
    Ok(())
}

async fn generate(session: &mut MenuSession, config: &Config, checker: &BreachChecker) -> Result<(), Box<dyn Error>> {
    let prompt = format!("Password length ({}-{}):", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH);
    let length = CustomType::<usize>::new(&prompt)
        .with_default(session.length)
        .with_error_message("Please enter a whole number")
        .with_validator(|length: &usize| {
            Ok(match check_length(*length) {
                Ok(()) => Validation::Valid,
                Err(msg) => Validation::Invalid(msg.into()),
            })
        })
        .prompt()?;

    let charset = CharsetConfig {
        uppercase: Confirm::new("Include uppercase letters?").with_default(session.charset.uppercase).prompt()?,
        lowercase: Confirm::new("Include lowercase letters?").with_default(session.charset.lowercase).prompt()?,
        numbers: Confirm::new("Include numbers?").with_default(session.charset.numbers).prompt()?,
        symbols: Confirm::new("Include symbols?").with_default(session.charset.symbols).prompt()?,
    };

    // The previous verdict belongs to the previous password
    session.board.clear();

    let generator = PasswordGenerator::with_sampling(config.sampling);
    let password = match generator.generate_password(length, &charset) {
        Ok(password) => password,
        Err(e) => {
            eprintln!("❌ Failed to generate password: {}", e);
            return Ok(());
        }
    };

    session.length = length;
    session.charset = charset;

    let ticket = session.board.begin();
    if let Some(status) = session.board.current() {
        print_status(status);
    }

    // Awaited in place: no newer ticket can be issued before this completes
    let status = checker.check(&password).await;
    session.board.complete(ticket, status);

    let outcome = GenerationOutcome {
        strength: crypto::analyze_password_strength(&password),
        password,
        breach: session.board.current().cloned(),
    };
    print_generation(&outcome, false)?;

    Ok(())
}

async fn check(session: &mut MenuSession, checker: &BreachChecker) -> Result<(), Box<dyn Error>> {
    let password = Password::new("Password to check:")
        .with_display_mode(inquire::PasswordDisplayMode::Hidden)
        .without_confirmation()
        .prompt()?;

    if password.is_empty() {
        eprintln!("❌ Password must not be empty.");
        return Ok(());
    }

    let ticket = session.board.begin();
    let status = checker.check(&password).await;
    session.board.complete(ticket, status);

    if let Some(status) = session.board.current() {
        print_check(&password, status, false)?;
    }

    Ok(())
}

fn check_length(length: usize) -> Result<(), String> {
    if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(format!("Length must be between {} and {}", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(check_length(MIN_PASSWORD_LENGTH).is_ok());
        assert!(check_length(MAX_PASSWORD_LENGTH).is_ok());
        assert!(check_length(MIN_PASSWORD_LENGTH - 1).is_err());
        assert!(check_length(MAX_PASSWORD_LENGTH + 1).is_err());
    }

    #[test]
    fn out_of_range_length_message_names_bounds() {
        let err = check_length(4).unwrap_err();
        assert!(err.contains("between 8 and 64"), "message was {}", err);
    }
}
