//! Behavioral tests for the payment ledger.
//!
//! Cover the acceptance rule, receipt synthesis, rejection semantics, and
//! the ordering guarantees of the in-memory record.

use std::{collections::HashSet, sync::Arc};

use paygate_core::{PaymentLedger, PaymentRejected, PaymentRequest};

const ACCEPTED_CARD: &str = "1230896983";
const DECLINED_CARD: &str = "1234567890";

fn request(card: &str, amount: f64) -> PaymentRequest {
    PaymentRequest { credit_card: card.to_string(), amount }
}

#[test]
fn ledger_starts_empty() {
    let ledger = PaymentLedger::new();

    assert!(ledger.list_all().is_empty());
    assert!(ledger.is_empty());
    assert_eq!(ledger.len(), 0);
}

#[test]
fn accepted_payment_returns_receipt_with_requested_amount() {
    let ledger = PaymentLedger::new();

    let receipt = ledger.pay(request(ACCEPTED_CARD, 43.7)).expect("payment should be accepted");

    assert_eq!(receipt.amount, 43.7);
    assert_eq!(ledger.len(), 1);
}

#[test]
fn receipt_id_is_a_prefixed_uuid() {
    let ledger = PaymentLedger::new();

    let receipt = ledger.pay(request(ACCEPTED_CARD, 43.7)).expect("payment should be accepted");

    let id = receipt.pay_receipt_id.as_str();
    assert!(id.starts_with("RECEIPT:"), "unexpected receipt id: {id}");
    assert_eq!(id.len(), 44);
    assert!(
        id["RECEIPT:".len()..].chars().all(|c| matches!(c, '0'..='9' | 'a'..='f' | '-')),
        "unexpected receipt id: {id}"
    );
}

#[test]
fn rejected_payment_carries_amount_and_leaves_ledger_unchanged() {
    let ledger = PaymentLedger::new();

    let err = ledger.pay(request(DECLINED_CARD, 43.7)).expect_err("payment should be rejected");

    assert_eq!(err, PaymentRejected { amount: 43.7 });
    assert_eq!(ledger.len(), 0);
}

#[test]
fn acceptance_token_matches_anywhere_in_the_card() {
    let ledger = PaymentLedger::new();

    for card in ["896983", "896983000", "000896983", "12896983421"] {
        ledger.pay(request(card, 1.0)).expect("token as substring should be accepted");
    }

    assert_eq!(ledger.len(), 4);
}

#[test]
fn partial_or_broken_token_is_rejected() {
    let ledger = PaymentLedger::new();

    for card in ["89698", "96983", "8969083", "983896"] {
        ledger.pay(request(card, 1.0)).expect_err("card without the full token");
    }

    assert!(ledger.is_empty());
}

#[test]
fn empty_card_is_rejected_not_a_crash() {
    let ledger = PaymentLedger::new();

    let err = ledger.pay(request("", 10.0)).expect_err("empty card should be rejected");

    assert_eq!(err.amount, 10.0);
    assert!(ledger.is_empty());
}

#[test]
fn non_positive_amounts_are_rejected() {
    let ledger = PaymentLedger::new();

    for amount in [0.0, -1.0, -43.7] {
        ledger.pay(request(ACCEPTED_CARD, amount)).expect_err("amount should be rejected");
    }

    assert!(ledger.is_empty());
}

#[test]
fn list_all_preserves_acceptance_order() {
    let ledger = PaymentLedger::new();

    let first = ledger.pay(request(ACCEPTED_CARD, 1.0)).expect("first payment");
    let second = ledger.pay(request("5558969830", 2.0)).expect("second payment");

    let entries = ledger.list_all();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], first);
    assert_eq!(entries[1], second);
}

#[test]
fn reads_are_idempotent() {
    let ledger = PaymentLedger::new();
    ledger.pay(request(ACCEPTED_CARD, 5.0)).expect("payment");

    assert_eq!(ledger.list_all(), ledger.list_all());
}

#[test]
fn receipt_ids_are_unique_across_payments() {
    let ledger = PaymentLedger::new();

    for _ in 0..100 {
        ledger.pay(request(ACCEPTED_CARD, 1.0)).expect("payment");
    }

    let ids: HashSet<String> =
        ledger.list_all().into_iter().map(|r| r.pay_receipt_id.as_str().to_string()).collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn concurrent_payments_are_all_recorded() {
    let ledger = Arc::new(PaymentLedger::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let ledger = Arc::clone(&ledger);
            std::thread::spawn(move || {
                for _ in 0..50 {
                    ledger.pay(request(ACCEPTED_CARD, 1.0)).expect("payment accepted");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    assert_eq!(ledger.len(), 400);
}
