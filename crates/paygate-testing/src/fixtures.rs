//! Canned payment fixtures shared across integration tests.

use serde_json::{json, Value};

/// Card number that satisfies the acceptance rule.
pub const ACCEPTED_CARD: &str = "1230896983";

/// Card number that fails the acceptance rule.
pub const DECLINED_CARD: &str = "1234567890";

/// JSON body for a payment request.
pub fn payment_body(credit_card: &str, amount: f64) -> Value {
    json!({ "creditCard": credit_card, "amount": amount })
}
