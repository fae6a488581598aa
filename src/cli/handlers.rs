// src/cli/handlers.rs
use console::style;
use std::error::Error;

use crate::api::types::{BreachCheckResponse, PasswordGenerationResponse};
use crate::breach::BreachChecker;
use crate::cli::commands::GenerateOptions;
use crate::core::config::Config;
use crate::crypto;
use crate::generators::{GeneratorError, PasswordGenerator, Sampling};
use crate::models::{BreachStatus, CharsetConfig};

#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub password: String,
    pub strength: u8,
    pub breach: Option<BreachStatus>,
}

// Handlers for CLI commands
pub async fn handle_generate(
    opts: &GenerateOptions,
    config: &Config,
    checker: &BreachChecker,
) -> Result<GenerationOutcome, GeneratorError> {
    let sampling = if opts.rejection_sampling { Sampling::Rejection } else { config.sampling };
    let length = opts.length.unwrap_or(config.default_password_length);

    generate_and_check(length, &opts.charset(), sampling, checker, !opts.skip_check).await
}

/// Generate, then optionally check. A failed lookup never fails generation.
pub async fn generate_and_check(
    length: usize,
    charset: &CharsetConfig,
    sampling: Sampling,
    checker: &BreachChecker,
    check: bool,
) -> Result<GenerationOutcome, GeneratorError> {
    let password = PasswordGenerator::with_sampling(sampling).generate_password(length, charset)?;
    let strength = crypto::analyze_password_strength(&password);

    let breach = if check {
        Some(checker.check(&password).await)
    } else {
        None
    };

    Ok(GenerationOutcome { password, strength, breach })
}

pub fn print_generation(outcome: &GenerationOutcome, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        let response = PasswordGenerationResponse {
            success: true,
            password: Some(outcome.password.clone()),
            strength: Some(outcome.strength),
            breach: outcome.breach.clone().map(Into::into),
            error: None,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("\nGenerated Password: {}", style(&outcome.password).bold());
    println!("Strength: {}/100", outcome.strength);
    if let Some(status) = &outcome.breach {
        print_status(status);
    }
    Ok(())
}

pub fn print_check(password: &str, status: &BreachStatus, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        let response = BreachCheckResponse {
            success: true,
            breach: Some(status.clone().into()),
            strength: Some(crypto::analyze_password_strength(password)),
            feedback: crypto::strength_feedback(password),
            error: None,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    print_status(status);
    println!("Strength: {}/100", crypto::analyze_password_strength(password));
    for line in crypto::strength_feedback(password) {
        println!("  • {}", line);
    }
    Ok(())
}

pub fn print_status(status: &BreachStatus) {
    let line = match status {
        BreachStatus::Loading => style(format!("⏳ {}", status.message())).dim(),
        BreachStatus::Safe => style(format!("✅ {}", status.message())).green(),
        BreachStatus::Danger { .. } => style(format!("❌ {}", status.message())).red().bold(),
        BreachStatus::Unknown { .. } => style(format!("⚠️  {}", status.message())).yellow(),
    };
    println!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breach::testing::MockRangeSource;
    use std::sync::Arc;

    fn options() -> GenerateOptions {
        GenerateOptions {
            length: Some(20),
            no_uppercase: false,
            no_lowercase: false,
            no_numbers: false,
            no_symbols: false,
            rejection_sampling: false,
            skip_check: false,
            json: false,
        }
    }

    #[tokio::test]
    async fn generate_checks_by_default() {
        let checker = BreachChecker::new(Arc::new(MockRangeSource::with_body("")));
        let outcome = handle_generate(&options(), &Config::default(), &checker).await.unwrap();
        assert_eq!(outcome.password.len(), 20);
        assert_eq!(outcome.breach, Some(BreachStatus::Safe));
    }

    #[tokio::test]
    async fn lookup_failure_keeps_password() {
        let checker = BreachChecker::new(Arc::new(MockRangeSource::failing()));
        let outcome = handle_generate(&options(), &Config::default(), &checker).await.unwrap();
        assert_eq!(outcome.password.len(), 20);
        assert!(matches!(outcome.breach, Some(BreachStatus::Unknown { .. })));
    }

    #[tokio::test]
    async fn skip_check_makes_no_request() {
        let source = Arc::new(MockRangeSource::with_body(""));
        let checker = BreachChecker::new(source.clone());
        let opts = GenerateOptions { skip_check: true, ..options() };

        let outcome = handle_generate(&opts, &Config::default(), &checker).await.unwrap();
        assert!(outcome.breach.is_none());
        assert!(source.requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn no_classes_is_a_config_error() {
        let source = Arc::new(MockRangeSource::with_body(""));
        let checker = BreachChecker::new(source.clone());
        let opts = GenerateOptions {
            no_uppercase: true,
            no_lowercase: true,
            no_numbers: true,
            no_symbols: true,
            ..options()
        };

        let err = handle_generate(&opts, &Config::default(), &checker).await.unwrap_err();
        assert_eq!(err, GeneratorError::NoCharacterClass);
        assert!(source.requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn default_length_comes_from_config() {
        let checker = BreachChecker::new(Arc::new(MockRangeSource::with_body("")));
        let config = Config { default_password_length: 12, ..Config::default() };
        let opts = GenerateOptions { length: None, skip_check: true, ..options() };

        let outcome = handle_generate(&opts, &config, &checker).await.unwrap();
        assert_eq!(outcome.password.len(), 12);
    }
}
