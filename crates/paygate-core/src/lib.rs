//! Core payment domain for the paygate service.
//!
//! Provides the payment ledger, domain models, and error types shared by
//! the HTTP layer. The ledger is the single source of truth for accepted
//! payments and lives entirely in memory for the lifetime of the process.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod ledger;
pub mod models;

pub use error::{PaymentRejected, Result};
pub use ledger::PaymentLedger;
pub use models::{PaymentReceipt, PaymentRequest, ReceiptId};
