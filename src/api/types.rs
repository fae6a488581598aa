// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::models::{BreachStatus, BreachVerdict};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Success message (only present on success)
    pub message: Option<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// Generator requests and responses
#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct PasswordGenerationRequest {
    /// Password length (8-64, defaults to the configured length)
    pub length: Option<usize>,
    /// Include uppercase letters (default: true)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (default: true)
    pub include_lowercase: Option<bool>,
    /// Include numbers (default: true)
    pub include_numbers: Option<bool>,
    /// Include symbols (default: true)
    pub include_symbols: Option<bool>,
    /// Check the generated password against known breaches (default: true)
    pub check_breach: Option<bool>,
}

/// Breach verdict with a human-readable message.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct BreachReport {
    pub status: BreachVerdict,
    /// Times the password appeared in breaches (only for `danger`)
    pub occurrences: Option<u64>,
    pub message: String,
    /// Why the lookup failed (only for `unknown`)
    pub reason: Option<String>,
}

impl From<BreachStatus> for BreachReport {
    fn from(status: BreachStatus) -> Self {
        let (occurrences, reason) = match &status {
            BreachStatus::Danger { occurrences } => (Some(*occurrences), None),
            BreachStatus::Unknown { reason } => (None, Some(reason.clone())),
            _ => (None, None),
        };
        Self {
            status: status.verdict(),
            occurrences,
            message: status.message(),
            reason,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password (only present on success)
    pub password: Option<String>,
    /// Strength score 0-100
    pub strength: Option<u8>,
    /// Breach verdict (absent when the check was skipped)
    pub breach: Option<BreachReport>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct BreachCheckRequest {
    /// Password to check. Only a hash prefix leaves the server.
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct BreachCheckResponse {
    /// Whether the operation was successful
    pub success: bool,
    pub breach: Option<BreachReport>,
    /// Strength score 0-100
    pub strength: Option<u8>,
    /// Suggestions for a stronger password
    pub feedback: Vec<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}
