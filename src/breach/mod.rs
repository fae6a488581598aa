// src/breach/mod.rs
//
// Breach lookups over the k-anonymity range protocol: only the first five
// hex characters of the SHA-1 digest are sent, the suffix is matched here.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::crypto;
use crate::models::BreachStatus;

pub mod client;
pub mod status;

pub use client::PwnedRangeClient;
pub use status::StatusBoard;

#[derive(Debug, Error)]
pub enum BreachError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Range endpoint returned status {0}")]
    StatusError(u16),

    #[error("Invalid hash prefix: {0}")]
    InvalidPrefix(String),
}

pub type Result<T> = std::result::Result<T, BreachError>;

/// Anything that can answer a range query for a 5-character hash prefix.
#[async_trait]
pub trait RangeSource: Send + Sync {
    /// Raw response body: newline-delimited `SUFFIX:COUNT` records.
    async fn fetch_range(&self, prefix: &str) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeEntry {
    pub suffix: String,
    pub count: u64,
}

/// Parse a range response. Blank and malformed lines are skipped.
pub fn parse_range_response(body: &str) -> Vec<RangeEntry> {
    body.lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let (suffix, count) = line.split_once(':')?;
            match count.trim().parse::<u64>() {
                Ok(count) => Some(RangeEntry {
                    suffix: suffix.trim().to_string(),
                    count,
                }),
                Err(_) => {
                    log::debug!("Skipping malformed range line");
                    None
                }
            }
        })
        .collect()
}

/// Occurrence count of `suffix` in a parsed range. Padding entries carry a
/// zero count and never match.
pub fn find_suffix(entries: &[RangeEntry], suffix: &str) -> Option<u64> {
    entries
        .iter()
        .find(|entry| entry.suffix.eq_ignore_ascii_case(suffix))
        .map(|entry| entry.count)
        .filter(|count| *count > 0)
}

#[derive(Clone)]
pub struct BreachChecker {
    source: Arc<dyn RangeSource>,
}

impl BreachChecker {
    pub fn new(source: Arc<dyn RangeSource>) -> Self {
        Self { source }
    }

    /// Never fails: transport problems degrade to `BreachStatus::Unknown`.
    pub async fn check(&self, password: &str) -> BreachStatus {
        let hash = crypto::sha1_hex(password);
        let (prefix, suffix) = crypto::split_hash(&hash);

        log::debug!("Querying breach range for prefix {}", prefix);

        let body = match self.source.fetch_range(prefix).await {
            Ok(body) => body,
            Err(e) => {
                log::warn!("Breach lookup for prefix {} failed: {}", prefix, e);
                return BreachStatus::Unknown { reason: e.to_string() };
            }
        };

        let entries = parse_range_response(&body);
        log::debug!("Range {} returned {} entries", prefix, entries.len());

        match find_suffix(&entries, suffix) {
            Some(occurrences) => BreachStatus::Danger { occurrences },
            None => BreachStatus::Safe,
        }
    }
}
