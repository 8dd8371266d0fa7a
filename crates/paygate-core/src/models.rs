//! Domain models for payment requests and receipts.
//!
//! Defines the transient request shape, the receipt proof-of-acceptance
//! record, and the `ReceiptId` newtype. Wire names follow the JSON contract
//! of the HTTP boundary (`creditCard`, `payReceiptId`).

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Receipt identifier in the form `RECEIPT:<uuid>`.
///
/// The UUID part is a random v4 identifier in canonical hyphenated
/// lowercase form, making the full identifier 44 characters long.
///
/// # Example
///
/// ```
/// use paygate_core::models::ReceiptId;
/// let id = ReceiptId::generate();
/// assert!(id.as_str().starts_with("RECEIPT:"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Prefix shared by every receipt identifier.
    pub const PREFIX: &'static str = "RECEIPT:";

    /// Generates a new receipt identifier backed by a random UUID.
    ///
    /// Uses UUID v4 so identifiers are globally unique without
    /// coordination.
    pub fn generate() -> Self {
        Self(format!("{}{}", Self::PREFIX, Uuid::new_v4()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Incoming payment request.
///
/// Transient: constructed once per call and never stored. Boundary
/// validation checks the field constraints (non-empty card, positive
/// amount) before the ledger is consulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Credit-card identifier supplied by the caller.
    pub credit_card: String,
    /// Amount to charge. Must be strictly positive.
    pub amount: f64,
}

/// Proof of acceptance for a single payment.
///
/// Created only when the acceptance rule passes and immutable afterwards.
/// The amount is copied unchanged from the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    /// Unique receipt identifier.
    pub pay_receipt_id: ReceiptId,
    /// Amount charged.
    pub amount: f64,
}
