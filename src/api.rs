// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Scan API
 * HTTP surface over the orchestrator: health, single-probe and full scans
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use anyhow::{Context, Result};
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::orchestrator::Orchestrator;
use crate::probes::ProbeReport;
use crate::report;
use crate::validation::validate_domain;

/// Shared state behind every API route
pub struct ApiState {
    pub orchestrator: Orchestrator,
}

/// Build the API router with the CORS policy from configuration.
///
/// Browser dashboards are the expected consumer, so exactly one origin
/// is allowed and only GET (plus its preflight) is exposed.
pub fn create_api_router(state: Arc<ApiState>, config: &AppConfig) -> Result<Router> {
    let origin: HeaderValue = config
        .allowed_origin
        .parse()
        .with_context(|| format!("Invalid allowed origin: {}", config.allowed_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(Router::new()
        .route("/health", get(health_handler))
        .route("/scan/all", get(scan_all_handler))
        .route("/scan/{probe}", get(scan_probe_handler))
        .layer(cors)
        .with_state(state))
}

#[derive(Debug, Deserialize)]
struct ScanQueryParams {
    domain: Option<String>,
}

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
    version: &'static str,
}

/// Errors a handler can answer with, each carrying its status code
#[derive(Debug)]
enum ApiError {
    BadRequest(String),
    UnknownProbe(String),
    ProbeFailed(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::UnknownProbe(message) => (StatusCode::NOT_FOUND, message),
            ApiError::ProbeFailed(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "UP",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Run one probe; its failure is this request's failure
async fn scan_probe_handler(
    State(state): State<Arc<ApiState>>,
    Path(probe_name): Path<String>,
    Query(params): Query<ScanQueryParams>,
) -> Result<Json<ProbeReport>, ApiError> {
    let domain = require_domain(&params)?;

    let probe = state
        .orchestrator
        .registry()
        .get(&probe_name)
        .ok_or_else(|| ApiError::UnknownProbe(format!("unknown probe: {}", probe_name)))?;

    info!("API scan: probe {} against {}", probe_name, domain);

    match probe.scan(&domain).await {
        Ok(result) => Ok(Json(ProbeReport {
            probe: probe.name().to_string(),
            domain,
            result,
        })),
        Err(err) => {
            warn!("Probe {} failed for {}: {}", probe_name, domain, err);
            Err(ApiError::ProbeFailed(err.to_string()))
        }
    }
}

/// Run the full probe set; failing probes degrade to placeholder text,
/// so this only errors on bad input
async fn scan_all_handler(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<ScanQueryParams>,
) -> Result<Json<Vec<ProbeReport>>, ApiError> {
    let domain = require_domain(&params)?;

    info!("API scan: full probe set against {}", domain);

    let results = state
        .orchestrator
        .run_all(&domain)
        .await
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;

    Ok(Json(report::assemble(&domain, &results)))
}

fn require_domain(params: &ScanQueryParams) -> Result<String, ApiError> {
    let raw = params.domain.as_deref().unwrap_or_default();
    if raw.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "domain parameter is required".to_string(),
        ));
    }

    validate_domain(raw).map_err(|err| ApiError::BadRequest(err.to_string()))
}
