// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

// DNS Record Probe
// Resolves the address, mail, name server and TXT records of a domain
// © 2026 Bountyy Oy

use async_trait::async_trait;
use anyhow::{Context, Result};
use hickory_resolver::config::LookupIpStrategy;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use std::net::IpAddr;
use tracing::debug;

use crate::errors::{ProbeError, ProbeResult};
use crate::probes::Probe;

/// Line suffix emitted when a secondary record family cannot be resolved
const RESOLUTION_ERROR: &str = "resolution error";

/// Resolves A/AAAA, MX, NS and TXT records.
///
/// Only the address lookup is fatal: a domain that does not resolve has
/// nothing to report. The secondary families degrade to an in-report
/// placeholder line so one missing record type never hides the others.
pub struct DnsProbe {
    resolver: TokioResolver,
}

impl DnsProbe {
    /// Build a probe over the system resolver configuration
    pub fn new() -> Result<Self> {
        let mut builder = TokioResolver::builder(TokioConnectionProvider::default())
            .context("Failed to create DNS resolver")?;
        // The default strategy asks for AAAA only when A comes back
        // empty; dual-stack hosts must report both families
        builder.options_mut().ip_strategy = LookupIpStrategy::Ipv4AndIpv6;

        Ok(Self {
            resolver: builder.build(),
        })
    }

    /// Build a probe over a caller-supplied resolver
    pub fn with_resolver(resolver: TokioResolver) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl Probe for DnsProbe {
    async fn scan(&self, domain: &str) -> ProbeResult<String> {
        debug!("Resolving records for {}", domain);

        let lookup = self
            .resolver
            .lookup_ip(domain)
            .await
            .map_err(|e| ProbeError::ResolutionFailed {
                domain: domain.to_string(),
                reason: e.to_string(),
            })?;

        let mail = match self.resolver.mx_lookup(domain).await {
            Ok(response) => Some(
                response
                    .iter()
                    .map(|mx| (mx.preference(), mx.exchange().to_string()))
                    .collect(),
            ),
            Err(e) => {
                debug!("MX lookup failed for {}: {}", domain, e);
                None
            }
        };

        let name_servers = match self.resolver.ns_lookup(domain).await {
            Ok(response) => Some(response.iter().map(|ns| ns.to_string()).collect()),
            Err(e) => {
                debug!("NS lookup failed for {}: {}", domain, e);
                None
            }
        };

        let text = match self.resolver.txt_lookup(domain).await {
            Ok(response) => Some(
                response
                    .iter()
                    .map(|txt| {
                        txt.iter()
                            .map(|data| String::from_utf8_lossy(data))
                            .collect::<String>()
                    })
                    .collect(),
            ),
            Err(e) => {
                debug!("TXT lookup failed for {}: {}", domain, e);
                None
            }
        };

        Ok(render_records(RecordSet {
            addresses: lookup.iter().collect(),
            mail,
            name_servers,
            text,
        }))
    }

    fn name(&self) -> &'static str {
        "dns"
    }
}

/// Outcome of the four lookups behind one scan. A `None` family failed
/// to resolve and degrades to its placeholder line.
struct RecordSet {
    addresses: Vec<IpAddr>,
    mail: Option<Vec<(u16, String)>>,
    name_servers: Option<Vec<String>>,
    text: Option<Vec<String>>,
}

/// Render the labeled report: addresses first, then MX, NS and TXT,
/// newline-separated with no trailing newline
fn render_records(records: RecordSet) -> String {
    let mut lines: Vec<String> = records
        .addresses
        .iter()
        .map(|address| format!("IP: {}", address))
        .collect();

    match records.mail {
        Some(entries) => lines.extend(
            entries
                .into_iter()
                .map(|(preference, exchange)| format!("MX: {} {}", preference, exchange)),
        ),
        None => lines.push(format!("MX: {}", RESOLUTION_ERROR)),
    }

    match records.name_servers {
        Some(entries) => lines.extend(
            entries
                .into_iter()
                .map(|target| format!("NS: {}", target)),
        ),
        None => lines.push(format!("NS: {}", RESOLUTION_ERROR)),
    }

    match records.text {
        Some(entries) => lines.extend(entries.into_iter().map(|text| format!("TXT: {}", text))),
        None => lines.push(format!("TXT: {}", RESOLUTION_ERROR)),
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_resolver::config::ResolverConfig;

    #[tokio::test]
    async fn test_probe_construction() {
        let probe = DnsProbe::new();
        assert!(probe.is_ok());
    }

    #[tokio::test]
    async fn test_probe_identity() {
        let probe = DnsProbe::new().unwrap();
        assert_eq!(probe.name(), "dns");
    }

    #[tokio::test]
    async fn test_lookup_covers_both_address_families() {
        let probe = DnsProbe::new().unwrap();
        assert_eq!(
            probe.resolver.options().ip_strategy,
            LookupIpStrategy::Ipv4AndIpv6
        );
    }

    #[tokio::test]
    async fn test_failed_address_lookup_is_fatal() {
        // A resolver with no name servers cannot answer anything
        let resolver = TokioResolver::builder_with_config(
            ResolverConfig::new(),
            TokioConnectionProvider::default(),
        )
        .build();
        let probe = DnsProbe::with_resolver(resolver);

        let err = probe.scan("example.com").await.unwrap_err();
        assert!(matches!(err, ProbeError::ResolutionFailed { .. }));
    }

    #[test]
    fn test_render_keeps_family_order() {
        let report = render_records(RecordSet {
            addresses: vec![
                "93.184.216.34".parse().unwrap(),
                "2606:2800:220:1:248:1893:25c8:1946".parse().unwrap(),
            ],
            mail: Some(vec![(10, "mail.example.com.".to_string())]),
            name_servers: Some(vec!["a.iana-servers.net.".to_string()]),
            text: Some(vec!["v=spf1 -all".to_string()]),
        });

        assert_eq!(
            report,
            "IP: 93.184.216.34\nIP: 2606:2800:220:1:248:1893:25c8:1946\n\
             MX: 10 mail.example.com.\nNS: a.iana-servers.net.\nTXT: v=spf1 -all"
        );
    }

    #[test]
    fn test_failed_secondary_families_degrade_in_report() {
        let report = render_records(RecordSet {
            addresses: vec!["93.184.216.34".parse().unwrap()],
            mail: None,
            name_servers: None,
            text: None,
        });

        assert_eq!(
            report,
            "IP: 93.184.216.34\nMX: resolution error\nNS: resolution error\nTXT: resolution error"
        );
        assert!(!report.ends_with('\n'));
    }
}
