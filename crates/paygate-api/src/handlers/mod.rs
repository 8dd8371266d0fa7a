//! HTTP request handlers for the paygate API.
//!
//! Handlers follow one pattern: validate input at the boundary, call into
//! the ledger, and map domain outcomes onto HTTP responses. A rejected
//! payment is an expected outcome and maps to 400, never to 500.

pub mod health;
pub mod payments;

pub use health::health_check;
pub use payments::{list_transactions, pay_by_credit_card};
