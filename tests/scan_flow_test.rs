// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Scan Flow Tests
 * Full pipeline: registry -> orchestrator -> assembled report
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use async_trait::async_trait;
use luotain_scanner::errors::{ProbeError, ProbeResult};
use luotain_scanner::orchestrator::Orchestrator;
use luotain_scanner::probes::Probe;
use luotain_scanner::registry::ProbeRegistry;
use luotain_scanner::report;
use std::sync::Arc;
use std::time::Duration;

struct StubProbe {
    name: &'static str,
    output: &'static str,
    delay: Duration,
}

impl StubProbe {
    fn new(name: &'static str, output: &'static str) -> Self {
        Self {
            name,
            output,
            delay: Duration::ZERO,
        }
    }

    fn slow(name: &'static str, output: &'static str, delay_ms: u64) -> Self {
        Self {
            name,
            output,
            delay: Duration::from_millis(delay_ms),
        }
    }
}

#[async_trait]
impl Probe for StubProbe {
    async fn scan(&self, _domain: &str) -> ProbeResult<String> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.output.to_string())
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

struct BrokenProbe {
    name: &'static str,
}

#[async_trait]
impl Probe for BrokenProbe {
    async fn scan(&self, domain: &str) -> ProbeResult<String> {
        Err(ProbeError::ConnectionFailed {
            host: domain.to_string(),
            reason: "handshake torn down".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

fn full_stub_registry() -> Arc<ProbeRegistry> {
    let mut registry = ProbeRegistry::new();
    // Registered out of report order on purpose
    registry.register(Arc::new(StubProbe::slow("sensitive", "no sensitive file found", 30)));
    registry.register(Arc::new(StubProbe::new("dns", "IP: 93.184.216.34")));
    registry.register(Arc::new(BrokenProbe { name: "ssl" }));
    registry.register(Arc::new(StubProbe::new(
        "header",
        "HSTS: max-age=31536000 | CSP:  | X-Frame-Options: DENY",
    )));
    registry.register(Arc::new(StubProbe::slow("subdomain", "a.example.com , b.example.com", 10)));
    Arc::new(registry)
}

#[tokio::test]
async fn test_full_scan_assembles_in_fixed_order() {
    let orchestrator = Orchestrator::new(full_stub_registry());

    let results = orchestrator.run_all("example.com").await.unwrap();
    assert_eq!(results.len(), 5);

    let reports = report::assemble("example.com", &results);
    let identities: Vec<&str> = reports.iter().map(|r| r.probe.as_str()).collect();
    assert_eq!(
        identities,
        vec!["dns", "ssl", "header", "subdomain", "sensitive"]
    );

    assert_eq!(reports[0].result, "IP: 93.184.216.34");
    assert_eq!(reports[3].result, "a.example.com , b.example.com");
    assert_eq!(reports[4].result, "no sensitive file found");
}

#[tokio::test]
async fn test_failed_probe_degrades_to_placeholder() {
    let orchestrator = Orchestrator::new(full_stub_registry());

    let results = orchestrator.run_all("example.com").await.unwrap();
    let reports = report::assemble("example.com", &results);

    let ssl = reports.iter().find(|r| r.probe == "ssl").unwrap();
    assert!(ssl.result.starts_with("scan failed: "));
    assert!(ssl.result.contains("handshake torn down"));

    // The failure stays contained to its own section
    assert!(reports
        .iter()
        .filter(|r| r.probe != "ssl")
        .all(|r| !r.result.starts_with("scan failed")));
}

#[tokio::test]
async fn test_unregistered_identity_renders_empty() {
    let mut registry = ProbeRegistry::new();
    registry.register(Arc::new(StubProbe::new("dns", "IP: 93.184.216.34")));
    let orchestrator = Orchestrator::new(Arc::new(registry));

    let results = orchestrator.run_all("example.com").await.unwrap();
    let reports = report::assemble("example.com", &results);

    assert_eq!(reports.len(), 5);
    let subdomain = reports.iter().find(|r| r.probe == "subdomain").unwrap();
    assert_eq!(subdomain.result, "");
}

#[tokio::test]
async fn test_rendered_text_keeps_section_layout() {
    let orchestrator = Orchestrator::new(full_stub_registry());

    let results = orchestrator.run_all("example.com").await.unwrap();
    let rendered = report::render_text(&report::assemble("example.com", &results));

    let positions: Vec<usize> = ["=== DNS ===", "=== SSL ===", "=== HEADERS ===", "=== SUBDOMAINS ===", "=== SENSITIVE ==="]
        .iter()
        .map(|title| rendered.find(title).unwrap())
        .collect();

    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(rendered.contains("=== DNS ===\nIP: 93.184.216.34\n"));
}

#[tokio::test]
async fn test_repeat_scans_are_stable() {
    let orchestrator = Orchestrator::new(full_stub_registry());

    let first = report::assemble(
        "example.com",
        &orchestrator.run_all("example.com").await.unwrap(),
    );
    let second = report::assemble(
        "example.com",
        &orchestrator.run_all("example.com").await.unwrap(),
    );

    assert_eq!(first, second);
}
