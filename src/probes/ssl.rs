// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - TLS Certificate Probe
 * Completes a real TLS handshake and reports the leaf certificate
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use async_trait::async_trait;
use chrono::DateTime;
use rustls_pki_types::ServerName;
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;
use tracing::debug;
use x509_parser::prelude::*;

use crate::errors::{ProbeError, ProbeResult};
use crate::probes::Probe;

/// Inspects the certificate a domain actually serves on port 443.
///
/// The handshake verifies against the webpki root set, so an expired or
/// self-signed certificate surfaces as a connection failure rather than
/// a report. SNI is always sent; without it most CDNs return the wrong
/// certificate.
pub struct SslProbe {
    connector: TlsConnector,
}

impl SslProbe {
    pub fn new() -> Self {
        let mut roots = RootCertStore::empty();
        roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

        let config = ClientConfig::builder()
            .with_root_certificates(roots)
            .with_no_client_auth();

        Self {
            connector: TlsConnector::from(Arc::new(config)),
        }
    }
}

impl Default for SslProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Probe for SslProbe {
    async fn scan(&self, domain: &str) -> ProbeResult<String> {
        let addr = format!("{}:443", domain);
        debug!("Opening TLS session to {}", addr);

        let stream =
            TcpStream::connect(&addr)
                .await
                .map_err(|e| ProbeError::ConnectionFailed {
                    host: domain.to_string(),
                    reason: format!("tcp connect: {}", e),
                })?;

        let server_name = ServerName::try_from(domain.to_string()).map_err(|e| {
            ProbeError::ConnectionFailed {
                host: domain.to_string(),
                reason: format!("invalid server name: {}", e),
            }
        })?;

        let tls = self
            .connector
            .connect(server_name, stream)
            .await
            .map_err(|e| ProbeError::ConnectionFailed {
                host: domain.to_string(),
                reason: format!("tls handshake: {}", e),
            })?;

        let (_, session) = tls.get_ref();
        // Guarded even though a verified handshake implies a chain
        let leaf = session
            .peer_certificates()
            .and_then(|chain| chain.first())
            .ok_or_else(|| ProbeError::ConnectionFailed {
                host: domain.to_string(),
                reason: "server presented no certificates".to_string(),
            })?;

        describe_certificate(leaf.as_ref())
    }

    fn name(&self) -> &'static str {
        "ssl"
    }
}

/// Render the report line for a DER-encoded leaf certificate.
///
/// Subject falls back to "unknown" when no common name is present;
/// issuer prefers the organization name and falls back to the issuer
/// common name, matching how public CAs fill their DNs.
fn describe_certificate(der: &[u8]) -> ProbeResult<String> {
    let (_, cert) = X509Certificate::from_der(der).map_err(|e| ProbeError::DecodeFailed {
        context: "leaf certificate".to_string(),
        reason: e.to_string(),
    })?;

    let subject = cert
        .subject()
        .iter_common_name()
        .next()
        .and_then(|cn| cn.as_str().ok())
        .unwrap_or("unknown");

    let issuer = cert
        .issuer()
        .iter_organization()
        .next()
        .and_then(|org| org.as_str().ok())
        .or_else(|| {
            cert.issuer()
                .iter_common_name()
                .next()
                .and_then(|cn| cn.as_str().ok())
        })
        .unwrap_or("unknown");

    let expires = DateTime::from_timestamp(cert.validity().not_after.timestamp(), 0)
        .map(|dt| dt.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "unknown".to_string());

    Ok(format!(
        "Domain: {} | Issuer: {} | Expires: {}",
        subject, issuer, expires
    ))
}
