// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Report Assembly
 * Orders fan-in results into the fixed report layout
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use std::collections::HashMap;

use crate::probes::ProbeReport;

/// Fixed presentation order: (probe identity, section title)
pub const SECTION_ORDER: &[(&str, &str)] = &[
    ("dns", "DNS"),
    ("ssl", "SSL"),
    ("header", "HEADERS"),
    ("subdomain", "SUBDOMAINS"),
    ("sensitive", "SENSITIVE"),
];

/// Reorder fan-in results into the standard section order.
///
/// The completion order of concurrent probes never leaks into the
/// report. An identity missing from `results` still gets its entry,
/// with empty content, so consumers can rely on the report shape.
pub fn assemble(domain: &str, results: &HashMap<&'static str, String>) -> Vec<ProbeReport> {
    assemble_ordered(domain, results, SECTION_ORDER)
}

/// Reorder results by an explicit (identity, title) order list
pub fn assemble_ordered(
    domain: &str,
    results: &HashMap<&'static str, String>,
    order: &[(&str, &str)],
) -> Vec<ProbeReport> {
    order
        .iter()
        .map(|(identity, _)| ProbeReport {
            probe: (*identity).to_string(),
            domain: domain.to_string(),
            result: results.get(*identity).cloned().unwrap_or_default(),
        })
        .collect()
}

/// Render assembled reports as a sectioned text document
pub fn render_text(reports: &[ProbeReport]) -> String {
    let mut out = String::new();

    for report in reports {
        out.push_str("=== ");
        out.push_str(&section_title(&report.probe));
        out.push_str(" ===\n");
        out.push_str(&report.result);
        out.push_str("\n\n");
    }

    out
}

fn section_title(identity: &str) -> String {
    SECTION_ORDER
        .iter()
        .find(|(id, _)| *id == identity)
        .map(|(_, title)| (*title).to_string())
        .unwrap_or_else(|| identity.to_uppercase())
}
