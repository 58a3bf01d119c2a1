//! Publishing configuration from the environment.
//!
//! The pipeline runs from automation; credentials come in through the
//! environment rather than flags so they stay out of shell history and CI
//! logs. Both the API token and the organization id are required up front -
//! a run that can generate but not publish would leave the remote host and
//! the local table of contents out of step.

use crate::error::{Error, Result};

/// Environment variable holding the GitBook API token.
pub const ENV_API_TOKEN: &str = "GITBOOK_API_TOKEN";

/// Environment variable holding the GitBook organization id.
pub const ENV_ORG_ID: &str = "GITBOOK_ORG_ID";

/// Optional override of the GitBook API base URL.
pub const ENV_API_URL: &str = "GITBOOK_API_URL";

/// Default GitBook API base URL.
pub const DEFAULT_API_URL: &str = "https://api.gitbook.com/v1";

/// Credentials and endpoint for the documentation host.
#[derive(Debug, Clone)]
pub struct PublishConfig {
    /// Bearer token for the GitBook API
    pub api_token: String,
    /// Organization that owns the spec collection
    pub org_id: String,
    /// API base URL, without a trailing slash
    pub api_url: String,
}

impl PublishConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<PublishConfig> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<PublishConfig> {
        let api_token = required(&lookup, ENV_API_TOKEN)?;
        let org_id = required(&lookup, ENV_ORG_ID)?;
        let api_url = lookup(ENV_API_URL)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(PublishConfig {
            api_token,
            org_id,
            api_url,
        })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::Configuration(format!(
            "environment variable {} is required",
            key
        ))),
    }
}
