// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Subdomain Probe Tests
 * Certificate transparency parsing against a mocked crt.sh endpoint
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use luotain_scanner::errors::ProbeError;
use luotain_scanner::http_client::HttpClient;
use luotain_scanner::probes::{Probe, SubdomainProbe};
use std::sync::Arc;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn probe_against(mock_server: &MockServer) -> SubdomainProbe {
    let http_client = Arc::new(HttpClient::new(30, "luotain-test").unwrap());
    SubdomainProbe::with_ct_base(http_client, mock_server.uri())
}

#[tokio::test]
async fn test_names_are_deduplicated_and_sorted() {
    let mock_server = MockServer::start().await;

    let body = r#"[
        {"id": 1, "name_value": "www.example.com"},
        {"id": 2, "name_value": "api.example.com\nwww.example.com"},
        {"id": 3, "name_value": "www.example.com"}
    ]"#;

    Mock::given(method("GET"))
        .and(query_param("q", "%.example.com"))
        .and(query_param("output", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = probe_against(&mock_server)
        .scan("example.com")
        .await
        .unwrap();

    assert_eq!(result, "api.example.com , www.example.com");
}

#[tokio::test]
async fn test_no_certificates_is_an_empty_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&mock_server)
        .await;

    let result = probe_against(&mock_server)
        .scan("example.com")
        .await
        .unwrap();

    assert_eq!(result, "");
}

#[tokio::test]
async fn test_entries_without_name_value_are_skipped() {
    let mock_server = MockServer::start().await;

    let body = r#"[
        {"id": 1},
        {"id": 2, "name_value": 17},
        {"id": 3, "name_value": "only.example.com"}
    ]"#;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let result = probe_against(&mock_server)
        .scan("example.com")
        .await
        .unwrap();

    assert_eq!(result, "only.example.com");
}

#[tokio::test]
async fn test_non_json_body_is_a_decode_failure() {
    let mock_server = MockServer::start().await;

    // crt.sh serves an HTML error page when overloaded
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
        .mount(&mock_server)
        .await;

    let result = probe_against(&mock_server).scan("example.com").await;

    assert!(matches!(result, Err(ProbeError::DecodeFailed { .. })));
}

#[tokio::test]
async fn test_probe_identity() {
    let http_client = Arc::new(HttpClient::new(30, "luotain-test").unwrap());
    assert_eq!(SubdomainProbe::new(http_client).name(), "subdomain");
}
