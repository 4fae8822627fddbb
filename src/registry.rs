// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Probe Registry
 * Owns the probe set and resolves probes by identity
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::debug;

use crate::http_client::HttpClient;
use crate::probes::{
    DnsProbe, HeaderProbe, Probe, SensitivePathProbe, SslProbe, SubdomainProbe,
};

/// Registration order doubles as report order, so `all()` is a Vec
/// rather than a map.
pub struct ProbeRegistry {
    probes: Vec<Arc<dyn Probe>>,
}

impl ProbeRegistry {
    pub fn new() -> Self {
        Self { probes: Vec::new() }
    }

    /// Build the canonical five-probe set in report order
    pub fn standard(http_client: Arc<HttpClient>) -> Result<Self> {
        let mut registry = Self::new();

        registry.register(Arc::new(
            DnsProbe::new().context("Failed to build DNS probe")?,
        ));
        registry.register(Arc::new(SslProbe::new()));
        registry.register(Arc::new(HeaderProbe::new(Arc::clone(&http_client))));
        registry.register(Arc::new(SubdomainProbe::new(Arc::clone(&http_client))));
        registry.register(Arc::new(SensitivePathProbe::new(http_client)));

        Ok(registry)
    }

    pub fn register(&mut self, probe: Arc<dyn Probe>) {
        debug!("Registered probe: {}", probe.name());
        self.probes.push(probe);
    }

    /// Look up a probe by identity
    pub fn get(&self, name: &str) -> Option<Arc<dyn Probe>> {
        self.probes.iter().find(|p| p.name() == name).cloned()
    }

    /// All probes in registration order
    pub fn all(&self) -> &[Arc<dyn Probe>] {
        &self.probes
    }

    /// Probe identities in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.probes.iter().map(|p| p.name()).collect()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.probes.iter().any(|p| p.name() == name)
    }

    pub fn count(&self) -> usize {
        self.probes.len()
    }
}

impl Default for ProbeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
