// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?";

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 64;
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }
}

// Which character classes take part in generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharsetConfig {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Default for CharsetConfig {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

impl CharsetConfig {
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Numbers => self.numbers,
            CharacterClass::Symbols => self.symbols,
        }
    }

    pub fn any_enabled(&self) -> bool {
        self.uppercase || self.lowercase || self.numbers || self.symbols
    }

    /// Concatenation of every enabled alphabet, in uppercase, lowercase,
    /// numbers, symbols order. Empty when nothing is enabled.
    pub fn pooled_alphabet(&self) -> Vec<char> {
        CharacterClass::ALL
            .iter()
            .filter(|class| self.is_enabled(**class))
            .flat_map(|class| class.alphabet().chars())
            .collect()
    }
}

/// Outcome of a breach lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BreachStatus {
    Loading,
    Safe,
    Danger { occurrences: u64 },
    Unknown { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BreachVerdict {
    Loading,
    Safe,
    Danger,
    Unknown,
}

impl BreachStatus {
    pub fn message(&self) -> String {
        match self {
            BreachStatus::Loading => "Checking password against known breaches...".to_string(),
            BreachStatus::Safe => "This password was not found in any known breach.".to_string(),
            BreachStatus::Danger { occurrences } => format!(
                "This password has appeared in data breaches {} time(s). Do not use it.",
                occurrences
            ),
            BreachStatus::Unknown { .. } => {
                "Could not reach the breach database. Breach status is unknown.".to_string()
            }
        }
    }

    pub fn verdict(&self) -> BreachVerdict {
        match self {
            BreachStatus::Loading => BreachVerdict::Loading,
            BreachStatus::Safe => BreachVerdict::Safe,
            BreachStatus::Danger { .. } => BreachVerdict::Danger,
            BreachStatus::Unknown { .. } => BreachVerdict::Unknown,
        }
    }

    pub fn is_breached(&self) -> bool {
        matches!(self, BreachStatus::Danger { .. })
    }
}
