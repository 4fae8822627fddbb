// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

// Security Header Probe
// Reports the HSTS, CSP and X-Frame-Options posture of the site root
// © 2026 Bountyy Oy

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::errors::ProbeResult;
use crate::http_client::{HttpClient, HttpResponse};
use crate::probes::Probe;

/// Fetches `https://<domain>` and reports three defensive headers.
///
/// An error page is as good as a landing page here: any status code
/// carries headers, so non-2xx responses are still reported. Absent
/// headers render as empty values, which is itself the finding.
pub struct HeaderProbe {
    http_client: Arc<HttpClient>,
}

impl HeaderProbe {
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Probe for HeaderProbe {
    async fn scan(&self, domain: &str) -> ProbeResult<String> {
        let url = format!("https://{}", domain);
        let response = self.http_client.get(&url).await?;

        debug!(
            "Header probe got {} from {} in {}ms",
            response.status_code, url, response.duration_ms
        );

        Ok(render_report(&response))
    }

    fn name(&self) -> &'static str {
        "header"
    }
}

fn render_report(response: &HttpResponse) -> String {
    let hsts = response
        .header("Strict-Transport-Security")
        .unwrap_or_default();
    let csp = response.header("Content-Security-Policy").unwrap_or_default();
    let xfo = response.header("X-Frame-Options").unwrap_or_default();

    format!("HSTS: {} | CSP: {} | X-Frame-Options: {}", hsts, csp, xfo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn response(status_code: u16, headers: &[(&str, &str)]) -> HttpResponse {
        HttpResponse {
            status_code,
            body: String::new(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
            duration_ms: 12,
        }
    }

    #[test]
    fn test_all_headers_present() {
        let response = response(
            200,
            &[
                ("strict-transport-security", "max-age=31536000"),
                ("content-security-policy", "default-src 'self'"),
                ("x-frame-options", "DENY"),
            ],
        );

        assert_eq!(
            render_report(&response),
            "HSTS: max-age=31536000 | CSP: default-src 'self' | X-Frame-Options: DENY"
        );
    }

    #[test]
    fn test_absent_headers_render_empty() {
        let response = response(200, &[]);
        assert_eq!(render_report(&response), "HSTS:  | CSP:  | X-Frame-Options: ");
    }

    #[test]
    fn test_error_status_still_reports_headers() {
        let response = response(503, &[("x-frame-options", "SAMEORIGIN")]);
        assert_eq!(
            render_report(&response),
            "HSTS:  | CSP:  | X-Frame-Options: SAMEORIGIN"
        );
    }
}
