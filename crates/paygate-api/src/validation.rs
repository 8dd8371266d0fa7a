//! Boundary validation for incoming payment requests.
//!
//! Field constraints are checked explicitly before the ledger is
//! consulted: a non-empty card identifier and a strictly positive amount.
//! Failures are reported as structured values, never panics.

use paygate_core::PaymentRequest;
use thiserror::Error;

/// Reason a payment request failed boundary validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `creditCard` was empty.
    #[error("creditCard must be a non-empty string")]
    EmptyCreditCard,
    /// `amount` was zero, negative, or not a finite number.
    #[error("amount must be a positive number")]
    NonPositiveAmount,
}

/// Validates field constraints on a payment request.
///
/// Returns the first violated constraint. The ledger applies its own
/// guards as well, so a request that slips through is rejected there
/// instead of crashing the service.
pub fn validate_payment_request(request: &PaymentRequest) -> Result<(), ValidationError> {
    if request.credit_card.is_empty() {
        return Err(ValidationError::EmptyCreditCard);
    }

    if !request.amount.is_finite() || request.amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount);
    }

    Ok(())
}
