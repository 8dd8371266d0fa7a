//! Error types and result handling for payment operations.
//!
//! The domain defines exactly one error kind: a payment declined by the
//! acceptance rule. Rejection is an expected outcome, not a defect, and
//! callers convert it into a client-visible response rather than retrying
//! or treating it as a crash.

use thiserror::Error;

/// Result type alias using [`PaymentRejected`].
pub type Result<T> = std::result::Result<T, PaymentRejected>;

/// Payment declined by the acceptance rule.
///
/// Carries the requested amount so the boundary layer can echo it back in
/// the client-visible message. The ledger is left untouched whenever this
/// is returned.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Payment rejected as \"{amount}\" cannot be paid")]
pub struct PaymentRejected {
    /// Amount from the rejected request.
    pub amount: f64,
}
