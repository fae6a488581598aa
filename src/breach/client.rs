// src/breach/client.rs
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use super::{BreachError, RangeSource, Result};
use crate::core::config::Config;
use crate::crypto;

/// `RangeSource` backed by the Pwned Passwords range API.
pub struct PwnedRangeClient {
    client: reqwest::Client,
    base_url: String,
    add_padding: bool,
}

impl PwnedRangeClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Ok(agent) = HeaderValue::from_str(&config.breach_user_agent) {
            headers.insert(USER_AGENT, agent);
        } else {
            log::warn!("Invalid user agent '{}', using default", config.breach_user_agent);
            headers.insert(USER_AGENT, HeaderValue::from_static(concat!("rust_passcheck/", env!("CARGO_PKG_VERSION"))));
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.breach_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.breach_api_url.trim_end_matches('/').to_string(),
            add_padding: config.breach_add_padding,
        })
    }

    pub fn range_url(&self, prefix: &str) -> String {
        format!("{}/range/{}", self.base_url, prefix)
    }
}

#[async_trait]
impl RangeSource for PwnedRangeClient {
    async fn fetch_range(&self, prefix: &str) -> Result<String> {
        if !crypto::is_valid_prefix(prefix) {
            return Err(BreachError::InvalidPrefix(prefix.to_string()));
        }

        let mut request = self.client.get(self.range_url(prefix));
        if self.add_padding {
            request = request.header("Add-Padding", "true");
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BreachError::StatusError(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
