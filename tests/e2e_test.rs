//! End-to-end test over a real TCP socket.
//!
//! Boots the full router on an ephemeral port and drives it with a real
//! HTTP client, covering the same flow a deployed instance serves.

use paygate_api::{create_router, AppState};
use paygate_testing::{
    fixtures::{payment_body, ACCEPTED_CARD, DECLINED_CARD},
    spawn_server,
};
use serde_json::{json, Value};

#[tokio::test]
async fn full_payment_flow_over_http() {
    let addr = spawn_server(create_router(AppState::default())).await;
    let base = format!("http://{addr}");
    let client = reqwest::Client::new();

    // Fresh service has no transactions.
    let listed: Value = client
        .get(format!("{base}/cctransactions"))
        .send()
        .await
        .expect("list request")
        .json()
        .await
        .expect("list body");
    assert_eq!(listed, json!([]));

    // Accepted payment returns a receipt.
    let response = client
        .post(format!("{base}/cctransactions"))
        .json(&payment_body(ACCEPTED_CARD, 43.7))
        .send()
        .await
        .expect("pay request");
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    let receipt: Value = response.json().await.expect("receipt body");
    assert_eq!(receipt["amount"], 43.7);

    // Declined payment surfaces the business error.
    let response = client
        .post(format!("{base}/cctransactions"))
        .json(&payment_body(DECLINED_CARD, 9.99))
        .send()
        .await
        .expect("pay request");
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let error: Value = response.json().await.expect("error body");
    assert_eq!(
        error["error"]["message"],
        "business error: Payment rejected as \"9.99\" cannot be paid"
    );

    // Ledger holds exactly the accepted payment.
    let listed: Value = client
        .get(format!("{base}/cctransactions"))
        .send()
        .await
        .expect("list request")
        .json()
        .await
        .expect("list body");
    assert_eq!(listed, json!([receipt]));

    // Health endpoint serves the fixed probe contract.
    let health: Value = client
        .get(format!("{base}/health"))
        .send()
        .await
        .expect("health request")
        .json()
        .await
        .expect("health body");
    assert_eq!(health, json!({ "status": "ok", "info": {}, "error": {}, "details": {} }));
}
