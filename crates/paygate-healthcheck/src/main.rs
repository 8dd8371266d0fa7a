//! Container healthcheck entry point.
//!
//! Exits 0 when the paygate service reports `status: ok`, 1 otherwise.

use std::process::ExitCode;

use paygate_healthcheck::{probe, DEFAULT_HEALTH_URL};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_target(false).init();

    let url = std::env::var("HEALTHCHECK_URL").unwrap_or_else(|_| DEFAULT_HEALTH_URL.to_string());

    ExitCode::from(probe(&url).await)
}
