// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Probe Error Types
 * Failure taxonomy shared by all reconnaissance probes
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use thiserror::Error;

/// Failure classes a probe can surface. Raw errors never cross the
/// orchestrator's fan-in boundary; they are rendered to placeholder text
/// there, so these variants only travel inside a single probe invocation.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Primary A/AAAA lookup failed. Secondary record types (MX, NS, TXT)
    /// degrade in-report instead of raising this.
    #[error("DNS resolution failed for {domain}: {reason}")]
    ResolutionFailed { domain: String, reason: String },

    /// TCP connect or TLS handshake could not complete.
    #[error("Connection failed for {host}: {reason}")]
    ConnectionFailed { host: String, reason: String },

    /// HTTP request could not be made at all (transport level, never an
    /// HTTP status).
    #[error("Request failed for {url}: {reason}")]
    RequestFailed { url: String, reason: String },

    /// Remote payload could not be decoded: malformed JSON, unparsable
    /// certificate, empty certificate chain.
    #[error("Decode failed for {context}: {reason}")]
    DecodeFailed { context: String, reason: String },
}

/// Convert reqwest transport errors into probe errors
impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        ProbeError::RequestFailed {
            url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            reason: err.to_string(),
        }
    }
}

/// Result type for probe operations
pub type ProbeResult<T> = Result<T, ProbeError>;
