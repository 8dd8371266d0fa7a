//! HTTP API for the paygate payment service.
//!
//! Wires the in-memory payment ledger into an Axum router exposing the
//! credit-card transaction endpoints and the health probe surface.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::sync::Arc;

use paygate_core::PaymentLedger;

pub mod config;
pub mod handlers;
pub mod server;
pub mod validation;

pub use config::Config;
pub use server::{create_router, start_server};

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Ledger of accepted payments, shared across handlers.
    pub ledger: Arc<PaymentLedger>,
}

impl AppState {
    /// Creates state around an existing ledger.
    pub fn new(ledger: Arc<PaymentLedger>) -> Self {
        Self { ledger }
    }
}

impl Default for AppState {
    /// State holding a fresh, empty ledger.
    fn default() -> Self {
        Self::new(Arc::new(PaymentLedger::new()))
    }
}
