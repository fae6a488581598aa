// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use log::LevelFilter;

use crate::generators::Sampling;
use crate::models::{DEFAULT_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

pub const DEFAULT_BREACH_API_URL: &str = "https://api.pwnedpasswords.com";

// Configuration for generator, breach lookups and the web interface
#[derive(Debug, Clone)]
pub struct Config {
    // Breach lookups
    pub breach_api_url: String,
    pub breach_user_agent: String,
    pub breach_add_padding: bool,
    pub breach_timeout: Option<Duration>,

    // Password Generation
    pub default_password_length: usize,
    pub sampling: Sampling,

    // Web Interface
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Breach lookups
            breach_api_url: DEFAULT_BREACH_API_URL.to_string(),
            breach_user_agent: concat!("rust_passcheck/", env!("CARGO_PKG_VERSION")).to_string(),
            breach_add_padding: true,
            breach_timeout: None,

            // Password Generation
            default_password_length: DEFAULT_PASSWORD_LENGTH,
            sampling: Sampling::Modulo,

            // Web Interface
            web_port: 5000,
            web_address: "127.0.0.1".to_string(),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

/// Accept only http(s) base URLs for the range endpoint.
pub fn parse_api_url(url: &str) -> Result<String, String> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_string())
    } else {
        Err(format!("'{}' is not an http(s) URL", url))
    }
}

impl Config {
    // Load configuration from environment variables. Problems are returned
    // as messages because the logger is configured from the result.
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unparsable values keep
    /// their defaults and add a warning.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Breach lookups
        if let Some(url) = lookup("BREACH_API_URL") {
            match parse_api_url(&url) {
                Ok(url) => config.breach_api_url = url,
                Err(e) => warnings.push(format!("Ignoring BREACH_API_URL: {}", e)),
            }
        }

        if let Some(agent) = lookup("BREACH_USER_AGENT") {
            if !agent.trim().is_empty() {
                config.breach_user_agent = agent;
            }
        }

        if let Some(val) = lookup("BREACH_ADD_PADDING") {
            match val.parse() {
                Ok(padding) => config.breach_add_padding = padding,
                Err(_) => warnings.push(format!("Invalid BREACH_ADD_PADDING '{}', using default", val)),
            }
        }

        if let Some(val) = lookup("BREACH_TIMEOUT_SECS") {
            match val.parse::<u64>() {
                Ok(0) => config.breach_timeout = None,
                Ok(secs) => config.breach_timeout = Some(Duration::from_secs(secs)),
                Err(_) => warnings.push(format!("Invalid BREACH_TIMEOUT_SECS '{}', no timeout set", val)),
            }
        }

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) => {
                    config.default_password_length = length.clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH);
                }
                Err(_) => warnings.push(format!("Invalid DEFAULT_PASSWORD_LENGTH '{}', using default", val)),
            }
        }

        if let Some(val) = lookup("GENERATOR_SAMPLING") {
            match val.to_lowercase().as_str() {
                "modulo" => config.sampling = Sampling::Modulo,
                "rejection" => config.sampling = Sampling::Rejection,
                _ => warnings.push(format!("Unknown GENERATOR_SAMPLING '{}', using modulo", val)),
            }
        }

        // Web Interface
        if let Some(val) = lookup("WEB_PORT") {
            match val.parse() {
                Ok(port) => config.web_port = port,
                Err(_) => warnings.push(format!("Invalid WEB_PORT '{}', using default", val)),
            }
        }

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!("Unknown LOG_LEVEL '{}', using info", level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        (config, warnings)
    }
}
