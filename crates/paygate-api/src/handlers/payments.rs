//! Credit-card transaction handlers.
//!
//! `GET /cctransactions` lists every accepted receipt in ledger order.
//! `POST /cctransactions` validates the request at the boundary, consults
//! the ledger, and maps acceptance to 201 and rejection to a business
//! error response.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use paygate_core::{PaymentReceipt, PaymentRequest};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::{validation::validate_payment_request, AppState};

/// Error payload returned for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error details including code and message.
    pub error: ErrorDetail,
}

/// Detailed error information.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Stable machine-readable error code.
    pub code: String,
    /// Human-readable error description.
    pub message: String,
}

/// Lists all accepted payment receipts in acceptance order.
#[instrument(name = "list_transactions", skip(state))]
pub async fn list_transactions(State(state): State<AppState>) -> Json<Vec<PaymentReceipt>> {
    let receipts = state.ledger.list_all();
    debug!(count = receipts.len(), "listing accepted transactions");
    Json(receipts)
}

/// Accepts or rejects a credit-card payment.
///
/// The body must be a JSON object with a `creditCard` string and a
/// positive numeric `amount`. Malformed bodies and field violations are
/// answered with 400 before the ledger is consulted; ledger rejections
/// come back as 400 with a `business error` message; accepted payments
/// return 201 with the receipt.
#[instrument(name = "pay_by_credit_card", skip(state, body))]
pub async fn pay_by_credit_card(State(state): State<AppState>, body: Bytes) -> Response {
    let request: PaymentRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "malformed payment request body");
            return error_response(
                StatusCode::BAD_REQUEST,
                "invalid_request",
                &format!("invalid request body: {e}"),
            );
        },
    };

    if let Err(violation) = validate_payment_request(&request) {
        warn!(error = %violation, "payment request failed validation");
        return error_response(StatusCode::BAD_REQUEST, "validation_failed", &violation.to_string());
    }

    match state.ledger.pay(request) {
        Ok(receipt) => (StatusCode::CREATED, Json(receipt)).into_response(),
        Err(rejection) => {
            debug!(amount = rejection.amount, "payment declined by acceptance rule");
            error_response(
                StatusCode::BAD_REQUEST,
                "payment_rejected",
                &format!("business error: {rejection}"),
            )
        },
    }
}

fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: ErrorDetail { code: code.to_string(), message: message.to_string() },
        }),
    )
        .into_response()
}
