// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Subdomain Probe
 * Enumerates subdomains from certificate transparency logs
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

use crate::errors::{ProbeError, ProbeResult};
use crate::http_client::HttpClient;
use crate::probes::Probe;

/// Default certificate transparency search endpoint
const DEFAULT_CT_BASE: &str = "https://crt.sh";

/// Separator between names in the rendered report
const NAME_SEPARATOR: &str = " , ";

/// Queries a crt.sh-compatible endpoint for certificates issued under
/// `*.<domain>` and reports the unique covered names.
///
/// One certificate entry may cover several names separated by newlines
/// in its `name_value` field; each is reported once, sorted, with no
/// further normalization. A domain with no issued certificates is a
/// successful scan with an empty report.
pub struct SubdomainProbe {
    http_client: Arc<HttpClient>,
    ct_base: String,
}

impl SubdomainProbe {
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self::with_ct_base(http_client, DEFAULT_CT_BASE)
    }

    /// Point the probe at a different CT endpoint (self-hosted mirrors)
    pub fn with_ct_base(http_client: Arc<HttpClient>, ct_base: impl Into<String>) -> Self {
        Self {
            http_client,
            ct_base: ct_base.into(),
        }
    }
}

#[async_trait]
impl Probe for SubdomainProbe {
    async fn scan(&self, domain: &str) -> ProbeResult<String> {
        let url = format!("{}/?q=%25.{}&output=json", self.ct_base, domain);
        debug!("Querying certificate transparency for {}", domain);

        let response = self.http_client.get(&url).await?;

        let entries: Vec<serde_json::Value> =
            serde_json::from_str(&response.body).map_err(|e| ProbeError::DecodeFailed {
                context: format!("certificate transparency response for {}", domain),
                reason: e.to_string(),
            })?;

        let names = extract_unique_names(&entries);
        debug!("{} unique names for {}", names.len(), domain);

        Ok(names.into_iter().collect::<Vec<_>>().join(NAME_SEPARATOR))
    }

    fn name(&self) -> &'static str {
        "subdomain"
    }
}

/// Collect unique `name_value` names; entries without the field or with
/// a non-string value are skipped
fn extract_unique_names(entries: &[serde_json::Value]) -> BTreeSet<String> {
    let mut unique = BTreeSet::new();

    for entry in entries {
        if let Some(names) = entry.get("name_value").and_then(|v| v.as_str()) {
            for name in names.lines() {
                let name = name.trim();
                if !name.is_empty() {
                    unique.insert(name.to_string());
                }
            }
        }
    }

    unique
}
