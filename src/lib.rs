// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Bountyy Oy - Luotain Library
 * Domain reconnaissance probes and the surfaces that drive them
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

pub mod config;
pub mod errors;
pub mod http_client;

// Probe implementations and their shared contract
pub mod probes;
pub mod registry;

// Scan execution and report shaping
pub mod orchestrator;
pub mod report;

// Edge validation
pub mod validation;

// HTTP API surface
pub mod api;
