// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Configuration
 * Environment-sourced runtime configuration, built once at startup
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;
use validator::Validate;

/// Runtime configuration. Every field has a default; the environment
/// overrides field by field and the result is validated as a whole.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Address the HTTP API binds to (LUOTAIN_BIND_ADDR)
    #[validate(length(min = 1))]
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Single origin allowed by the API CORS policy (LUOTAIN_ALLOWED_ORIGIN)
    #[validate(length(min = 1))]
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,

    /// Outbound HTTP timeout in seconds (LUOTAIN_HTTP_TIMEOUT)
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// User-Agent sent on outbound requests (LUOTAIN_USER_AGENT)
    #[validate(length(min = 1))]
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Domain the CLI scans when given none (LUOTAIN_DEFAULT_DOMAIN)
    #[serde(default)]
    pub default_domain: Option<String>,
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_allowed_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("luotain/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            allowed_origin: default_allowed_origin(),
            request_timeout_secs: default_request_timeout(),
            user_agent: default_user_agent(),
            default_domain: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment over the defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        config.bind_addr = env_or("LUOTAIN_BIND_ADDR", &config.bind_addr);
        config.allowed_origin = env_or("LUOTAIN_ALLOWED_ORIGIN", &config.allowed_origin);
        config.user_agent = env_or("LUOTAIN_USER_AGENT", &config.user_agent);

        if let Ok(raw) = std::env::var("LUOTAIN_HTTP_TIMEOUT") {
            match raw.parse() {
                Ok(secs) => config.request_timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring unparsable LUOTAIN_HTTP_TIMEOUT '{}', keeping {}s",
                    raw, config.request_timeout_secs
                ),
            }
        }

        if let Ok(domain) = std::env::var("LUOTAIN_DEFAULT_DOMAIN") {
            if !domain.trim().is_empty() {
                config.default_domain = Some(domain.trim().to_string());
            }
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

fn env_or(key: &str, fallback: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
