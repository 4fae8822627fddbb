// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Sensitive File Probe
 * Checks well-known paths for accidental public exposure
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::errors::ProbeResult;
use crate::http_client::HttpClient;
use crate::probes::Probe;

/// Paths checked for exposure, in report order
const SENSITIVE_PATHS: &[&str] = &[
    ".git/config",
    ".env",
    ".htaccess",
    "robots.txt",
    "sitemap.xml",
    "wp-config.php",
];

/// Report text when no path answers 200
const NO_FINDINGS: &str = "no sensitive file found";

/// Scheme used against real targets
const DEFAULT_SCHEME: &str = "https";

/// Requests a fixed list of well-known files over HTTPS and reports the
/// ones that answer 200.
///
/// Paths are probed sequentially so the findings keep list order. Only a
/// literal 200 counts: redirects to a catch-all page or soft-404s with
/// other codes are not findings. A transport failure on any path aborts
/// the probe, since the remaining checks would fail the same way.
pub struct SensitivePathProbe {
    http_client: Arc<HttpClient>,
    scheme: String,
}

impl SensitivePathProbe {
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self::with_scheme(http_client, DEFAULT_SCHEME)
    }

    /// Probe over a different scheme (plain-HTTP internal hosts)
    pub fn with_scheme(http_client: Arc<HttpClient>, scheme: impl Into<String>) -> Self {
        Self {
            http_client,
            scheme: scheme.into(),
        }
    }
}

#[async_trait]
impl Probe for SensitivePathProbe {
    async fn scan(&self, domain: &str) -> ProbeResult<String> {
        let mut findings: Vec<String> = Vec::new();

        for path in SENSITIVE_PATHS {
            let url = format!("{}://{}/{}", self.scheme, domain, path);
            let response = self.http_client.get(&url).await?;

            if response.status_code == 200 {
                warn!("Exposed file on {}: /{}", domain, path);
                findings.push(format!("{} -> 200 OK", path));
            }
        }

        Ok(render_findings(findings))
    }

    fn name(&self) -> &'static str {
        "sensitive"
    }
}

fn render_findings(findings: Vec<String>) -> String {
    if findings.is_empty() {
        NO_FINDINGS.to_string()
    } else {
        findings.join("\n")
    }
}
