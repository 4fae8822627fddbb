// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Input Validation
 * Lexical domain validation applied at the CLI and API edges
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// RFC 1035 hostname shape: dot-separated labels of letters, digits and
/// inner hyphens, at most 63 characters each
static DOMAIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$")
        .expect("domain pattern must compile")
});

/// Longest hostname a resolver will accept
const MAX_DOMAIN_LEN: usize = 253;

/// Validate and normalize a user-supplied domain.
///
/// The orchestration core only requires a non-empty domain; the lexical
/// checks live here at the edges so garbage never reaches the network.
/// Internationalized names must already be in punycode form.
pub fn validate_domain(domain: &str) -> Result<String> {
    let trimmed = domain.trim();

    if trimmed.is_empty() {
        bail!("domain must not be empty");
    }
    if trimmed.len() > MAX_DOMAIN_LEN {
        bail!("domain exceeds {} characters", MAX_DOMAIN_LEN);
    }
    if !DOMAIN_PATTERN.is_match(trimmed) {
        bail!("'{}' is not a valid domain name", trimmed);
    }

    Ok(trimmed.to_string())
}
