//! Append-only in-memory ledger of accepted payments.
//!
//! The ledger applies the acceptance rule, records accepted payments in
//! arrival order, and reports rejections without mutating state. Entries
//! live for the lifetime of the process; nothing is ever pruned.

use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use tracing::info;

use crate::{
    error::{PaymentRejected, Result},
    models::{PaymentReceipt, PaymentRequest, ReceiptId},
};

/// Gatekeeper and append-only store for accepted payments.
///
/// A single instance is shared by the request-handling layer for the
/// lifetime of the process. Appends are serialized through an internal
/// lock so concurrent handlers cannot interleave or lose entries.
#[derive(Debug, Default)]
pub struct PaymentLedger {
    entries: RwLock<Vec<PaymentReceipt>>,
}

impl PaymentLedger {
    /// Substring a card identifier must contain for the payment to be
    /// accepted: the ASCII codes for "YES" (89, 69, 83).
    pub const ACCEPTANCE_TOKEN: &'static str = "896983";

    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every accepted receipt, oldest first.
    pub fn list_all(&self) -> Vec<PaymentReceipt> {
        self.entries().clone()
    }

    /// Number of payments accepted so far.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Returns true while no payment has been accepted.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Applies the acceptance rule and records the payment if it passes.
    ///
    /// Accepted payments get a freshly generated receipt which is appended
    /// to the ledger and returned. Rejected payments leave the ledger
    /// untouched and surface as [`PaymentRejected`] carrying the requested
    /// amount. A request that slipped past boundary validation (empty card,
    /// non-positive or non-finite amount) is rejected here rather than
    /// recorded or allowed to panic.
    pub fn pay(&self, request: PaymentRequest) -> Result<PaymentReceipt> {
        if !Self::is_acceptable(&request) {
            info!(amount = request.amount, "payment rejected");
            return Err(PaymentRejected { amount: request.amount });
        }

        let receipt =
            PaymentReceipt { pay_receipt_id: ReceiptId::generate(), amount: request.amount };

        self.entries.write().unwrap_or_else(PoisonError::into_inner).push(receipt.clone());

        info!(
            receipt_id = %receipt.pay_receipt_id,
            amount = receipt.amount,
            "payment accepted"
        );

        Ok(receipt)
    }

    fn is_acceptable(request: &PaymentRequest) -> bool {
        request.amount.is_finite()
            && request.amount > 0.0
            && request.credit_card.contains(Self::ACCEPTANCE_TOKEN)
    }

    fn entries(&self) -> RwLockReadGuard<'_, Vec<PaymentReceipt>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }
}
