// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Reconnaissance Probes
 * Probe contract and the five built-in probe implementations
 *
 * Each probe inspects one facet of a target domain:
 * - dns: A/AAAA, MX, NS and TXT records
 * - ssl: leaf certificate subject, issuer and expiry
 * - header: HSTS, CSP and X-Frame-Options response headers
 * - subdomain: certificate transparency log enumeration
 * - sensitive: exposed well-known files
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

pub mod dns;
pub mod headers;
pub mod sensitive;
pub mod ssl;
pub mod subdomains;

pub use dns::DnsProbe;
pub use headers::HeaderProbe;
pub use sensitive::SensitivePathProbe;
pub use ssl::SslProbe;
pub use subdomains::SubdomainProbe;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::ProbeResult;

/// Contract implemented by every reconnaissance probe.
///
/// A probe takes a bare domain name and renders its whole report as one
/// string, or fails with a typed error. Implementations are constructed
/// once at startup and shared behind `Arc<dyn Probe>` across requests,
/// so they hold no per-scan state.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Run the probe against a domain and render its report text
    async fn scan(&self, domain: &str) -> ProbeResult<String>;

    /// Stable identity of this probe ("dns", "ssl", "header", ...)
    fn name(&self) -> &'static str;
}

/// One probe's contribution to a scan, as served over the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeReport {
    #[serde(rename = "scanner")]
    pub probe: String,
    pub domain: String,
    pub result: String,
}
