// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Luotain - External Domain Reconnaissance Scanner
 * CLI and API server entry point
 *
 * @copyright 2026 Bountyy Oy
 * @license Proprietary
 */

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{debug, info, Level};

use luotain_scanner::api::{create_api_router, ApiState};
use luotain_scanner::config::AppConfig;
use luotain_scanner::http_client::HttpClient;
use luotain_scanner::orchestrator::Orchestrator;
use luotain_scanner::registry::ProbeRegistry;
use luotain_scanner::report;
use luotain_scanner::validation::validate_domain;

/// Luotain - External Domain Reconnaissance Scanner
#[derive(Parser)]
#[command(name = "luotain")]
#[command(author = "Bountyy Oy <info@bountyy.fi>")]
#[command(version)]
#[command(about = "External domain reconnaissance: DNS, TLS, headers, subdomains, exposed files")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode, errors only
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a domain with the full probe set, or one probe
    Scan {
        /// Target domain (falls back to LUOTAIN_DEFAULT_DOMAIN)
        domain: Option<String>,

        /// Run only the named probe (dns, ssl, header, subdomain, sensitive)
        #[arg(short, long)]
        probe: Option<String>,
    },

    /// Run the HTTP API server
    Serve {
        /// Bind address (overrides LUOTAIN_BIND_ADDR)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// List available probe identities
    Probes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_target(false)
        .init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .thread_name("luotain-worker")
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    runtime.block_on(async_main(cli))
}

async fn async_main(cli: Cli) -> Result<()> {
    let config = AppConfig::from_env()?;

    let http_client = Arc::new(HttpClient::new(
        config.request_timeout_secs,
        &config.user_agent,
    )?);
    debug!(
        "Outbound HTTP client ready ({}s timeout, agent {})",
        http_client.timeout().as_secs(),
        config.user_agent
    );

    let registry = Arc::new(ProbeRegistry::standard(http_client)?);
    info!(
        "[SUCCESS] Probe registry initialized with {} probes",
        registry.count()
    );

    let orchestrator = Orchestrator::new(Arc::clone(&registry));

    match cli.command {
        Commands::Scan { domain, probe } => run_scan(&config, &orchestrator, domain, probe).await,
        Commands::Serve { bind } => serve(&config, orchestrator, bind).await,
        Commands::Probes => {
            for name in registry.names() {
                println!("{}", name);
            }
            Ok(())
        }
    }
}

async fn run_scan(
    config: &AppConfig,
    orchestrator: &Orchestrator,
    domain: Option<String>,
    probe: Option<String>,
) -> Result<()> {
    let raw = domain
        .or_else(|| config.default_domain.clone())
        .context("No domain given; pass one or set LUOTAIN_DEFAULT_DOMAIN")?;
    let domain = validate_domain(&raw)?;

    match probe {
        Some(name) => {
            let result = orchestrator.run_one(&name, &domain).await?;
            println!("{}", result);
        }
        None => {
            info!("Scanning {} with the full probe set", domain);
            let results = orchestrator.run_all(&domain).await?;
            let reports = report::assemble(&domain, &results);
            print!("{}", report::render_text(&reports));
        }
    }

    Ok(())
}

async fn serve(config: &AppConfig, orchestrator: Orchestrator, bind: Option<String>) -> Result<()> {
    let state = Arc::new(ApiState { orchestrator });
    let router = create_api_router(state, config)?;

    let bind_addr = bind.unwrap_or_else(|| config.bind_addr.clone());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    info!("Luotain API listening on {}", bind_addr);
    axum::serve(listener, router)
        .await
        .context("API server terminated")?;

    Ok(())
}
