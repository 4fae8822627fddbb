// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - HTTP Client
 * Shared outbound HTTP client for header, exposure and subdomain probes
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use anyhow::{Context, Result};
use reqwest::redirect::Policy;
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::errors::ProbeResult;

/// Maximum retained response body size (10MB) to prevent memory exhaustion
const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// Thin wrapper over reqwest with the scanner's outbound policy applied:
/// one timeout covering the whole request, at most five redirects, a fixed
/// User-Agent. Cheap to clone and shared across probes behind an Arc.
#[derive(Clone)]
pub struct HttpClient {
    client: Arc<Client>,
    timeout: Duration,
}

impl HttpClient {
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self> {
        let timeout = Duration::from_secs(timeout_secs);

        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::limited(5))
            .user_agent(user_agent)
            .tcp_keepalive(Duration::from_secs(60))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client: Arc::new(client),
            timeout,
        })
    }

    /// Send a GET request and collect status, headers and body.
    ///
    /// Non-2xx statuses are data, not errors; only transport failures
    /// (resolution, connect, timeout, TLS) return `Err`.
    pub async fn get(&self, url: &str) -> ProbeResult<HttpResponse> {
        let start = Instant::now();

        let response = self.client.get(url).send().await?;
        let status_code = response.status().as_u16();

        let mut headers = HashMap::with_capacity(response.headers().len());
        for (name, value) in response.headers() {
            if let Ok(text) = value.to_str() {
                headers.insert(name.as_str().to_string(), text.to_string());
            }
        }

        let bytes = response.bytes().await.unwrap_or_default();
        let retained = &bytes[..bytes.len().min(MAX_BODY_SIZE)];
        let body = String::from_utf8_lossy(retained).to_string();

        let duration_ms = start.elapsed().as_millis() as u64;
        debug!("GET {} -> {} in {}ms", url, status_code, duration_ms);

        Ok(HttpResponse {
            status_code,
            body,
            headers,
            duration_ms,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Response snapshot handed to probes once the body has been fully read
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: String,
    pub headers: HashMap<String, String>,
    pub duration_ms: u64,
}

impl HttpResponse {
    /// Case-insensitive header lookup; reqwest stores names lowercased
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers.get(&name.to_lowercase()).cloned()
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
