//! Shared test utilities for exercising the paygate HTTP surface.
//!
//! Keeps integration tests declarative: build a router, fire JSON requests
//! through tower's `oneshot`, and read decoded bodies back. Also spawns
//! real servers on ephemeral ports for tests that need a TCP socket.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::net::SocketAddr;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

pub mod fixtures;

/// Sends an arbitrary request through the router and returns the raw
/// response.
pub async fn send_request(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.expect("router should be infallible")
}

/// Issues a GET and decodes the JSON response body.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request =
        Request::builder().method("GET").uri(uri).body(Body::empty()).expect("build request");
    let response = send_request(app, request).await;
    split_json(response).await
}

/// Issues a POST with a JSON body and decodes the JSON response body.
pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

/// Issues a POST with a raw (possibly malformed) body and decodes the
/// JSON response body.
pub async fn post_raw(app: &Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("build request");
    let response = send_request(app, request).await;
    split_json(response).await
}

/// Serves the router on an ephemeral local port and returns its address.
///
/// The server task runs until the test process exits.
pub async fn spawn_server(app: Router) -> SocketAddr {
    let listener =
        tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server task failed");
    });

    addr
}

async fn split_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body should be JSON")
    };
    (status, value)
}
