//! Paygate payment acceptance service.
//!
//! Main entry point. Loads configuration, initializes structured logging,
//! constructs the in-memory ledger, and runs the HTTP server until a
//! shutdown signal arrives.

use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use paygate_api::{start_server, AppState, Config};
use paygate_core::PaymentLedger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config.rust_log);

    info!("Starting paygate payment service");
    info!(
        host = %config.host,
        port = config.port,
        request_timeout = config.request_timeout,
        "Configuration loaded"
    );

    let addr = config.parse_server_addr()?;
    let state = AppState::new(Arc::new(PaymentLedger::new()));

    start_server(state, addr, Duration::from_secs(config.request_timeout))
        .await
        .context("HTTP server failed")?;

    info!("Paygate shutdown complete");
    Ok(())
}

/// Initializes tracing with environment-based configuration.
fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer().with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
