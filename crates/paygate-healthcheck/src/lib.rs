//! Standalone health probe for container liveness checks.
//!
//! Issues a plain GET against the service `/health` endpoint, parses the
//! JSON body, and maps the result onto a process exit code: 0 when the
//! reported status is `ok`, 1 for anything else including network and
//! parse failures. Orchestrators only look at the exit code.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{error, warn};

/// Default URL probed when `HEALTHCHECK_URL` is not set.
pub const DEFAULT_HEALTH_URL: &str = "http://localhost:9090/health";

/// Process exit code for a healthy service.
pub const EXIT_HEALTHY: u8 = 0;

/// Process exit code for an unhealthy or unreachable service.
pub const EXIT_UNHEALTHY: u8 = 1;

/// Fetches the health endpoint and reports whether the service is healthy.
///
/// The HTTP status line is ignored on purpose: the verdict comes from the
/// `status` field of the JSON body alone.
///
/// # Errors
///
/// Returns an error when the endpoint is unreachable or the body is not
/// valid JSON.
pub async fn check_health(url: &str) -> Result<bool> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .context("failed to build HTTP client")?;

    let body = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("health request to {url} failed"))?
        .text()
        .await
        .context("failed to read health response body")?;

    let response: Value =
        serde_json::from_str(&body).context("health response body is not valid JSON")?;

    Ok(response.get("status").and_then(Value::as_str) == Some("ok"))
}

/// Runs the probe and maps the outcome onto an exit code.
pub async fn probe(url: &str) -> u8 {
    match check_health(url).await {
        Ok(true) => EXIT_HEALTHY,
        Ok(false) => {
            warn!(url, "unhealthy response received");
            EXIT_UNHEALTHY
        },
        Err(e) => {
            error!(url, error = %e, "health probe failed");
            EXIT_UNHEALTHY
        },
    }
}
