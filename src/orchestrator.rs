// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Scan Orchestrator
 * Fans registered probes out over tasks and collects their text
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::registry::ProbeRegistry;

/// Placeholder prefix for a probe that failed
const FAILURE_PREFIX: &str = "scan failed";

/// Runs scans against the probe set held by a [`ProbeRegistry`].
///
/// Full scans never fail on a failing probe: failures are rendered to
/// placeholder text inside the probe's own task, so the fan-in channel
/// only ever carries report text.
pub struct Orchestrator {
    registry: Arc<ProbeRegistry>,
}

impl Orchestrator {
    pub fn new(registry: Arc<ProbeRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ProbeRegistry {
        &self.registry
    }

    /// Run every registered probe against the domain concurrently and
    /// return one text entry per probe identity.
    ///
    /// All probes are spawned before any result is awaited, so total
    /// latency tracks the slowest probe rather than the sum. Probes are
    /// not time-bounded here; each bounds its own network work.
    pub async fn run_all(&self, domain: &str) -> Result<HashMap<&'static str, String>> {
        let domain = domain.trim();
        if domain.is_empty() {
            bail!("domain must not be empty");
        }

        let probe_count = self.registry.count();
        let (tx, mut rx) = mpsc::channel::<(&'static str, String)>(probe_count.max(1));

        info!("Dispatching {} probes against {}", probe_count, domain);

        for probe in self.registry.all() {
            let probe = Arc::clone(probe);
            let domain = domain.to_string();
            let tx = tx.clone();

            tokio::spawn(async move {
                let name = probe.name();
                let content = match probe.scan(&domain).await {
                    Ok(text) => {
                        debug!("Probe {} finished for {}", name, domain);
                        text
                    }
                    Err(err) => {
                        warn!("Probe {} failed for {}: {}", name, domain, err);
                        format!("{}: {}", FAILURE_PREFIX, err)
                    }
                };

                // Send only fails when the collector is gone, and then
                // there is nowhere left to report to
                let _ = tx.send((name, content)).await;
            });
        }
        drop(tx);

        let mut results = HashMap::with_capacity(probe_count);
        for _ in 0..probe_count {
            match rx.recv().await {
                Some((name, content)) => {
                    results.insert(name, content);
                }
                None => break,
            }
        }

        Ok(results)
    }

    /// Run a single probe by identity; its error propagates to the caller
    pub async fn run_one(&self, name: &str, domain: &str) -> Result<String> {
        let domain = domain.trim();
        if domain.is_empty() {
            bail!("domain must not be empty");
        }

        let probe = self
            .registry
            .get(name)
            .with_context(|| format!("unknown probe: {}", name))?;

        Ok(probe.scan(domain).await?)
    }
}
