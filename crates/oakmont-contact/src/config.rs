//! Contact form configuration

use crate::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

pub const ENDPOINT_VAR: &str = "OAKMONT_CONTACT_ENDPOINT";
pub const HIDE_DELAY_VAR: &str = "OAKMONT_STATUS_HIDE_MS";

pub const DEFAULT_ENDPOINT: &str = "https://pkspt356uj.execute-api.us-east-1.amazonaws.com/dev";
pub const DEFAULT_HIDE_DELAY_MS: u64 = 4000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Where inquiries are POSTed
    pub endpoint: String,
    /// How long a resolved status stays visible (milliseconds)
    pub hide_delay_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

impl ContactConfig {
    /// Build from a variable lookup: the looked-up value wins, then the
    /// endpoint baked in at compile time, then the built-in defaults.
    /// An unparsable hide delay falls back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        // Browser builds have no process environment.
        let endpoint = lookup(ENDPOINT_VAR)
            .or_else(|| option_env!("OAKMONT_CONTACT_ENDPOINT").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let hide_delay_ms = lookup(HIDE_DELAY_VAR)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_HIDE_DELAY_MS);

        Self {
            endpoint,
            hide_delay_ms,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_hide_delay_ms(mut self, hide_delay_ms: u64) -> Self {
        self.hide_delay_ms = hide_delay_ms;
        self
    }

    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }

    pub fn validate(&self) -> ContactResult<()> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| ContactError::Config(format!("Invalid endpoint {}: {}", self.endpoint, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ContactError::Config(format!(
                "Unsupported endpoint scheme: {}",
                other
            ))),
        }
    }
}
